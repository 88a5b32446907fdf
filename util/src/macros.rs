/// Report to stderr before a tracing subscriber exists.
#[macro_export]
macro_rules! bootstrap {
    ($x:expr $( , $xs:expr )* $(,)?) => {
        eprintln!(concat!("[bootstrap] ", $x) $( , $xs )*)
    };
}

/// Log the error of a `Result` and hand the `Result` back unchanged.
#[macro_export]
macro_rules! trace_catch {
    ($val:expr, $($rest:tt)*) => {{
        let val = $val;

        if let Err(ref e) = val {
            ::tracing::error!(error = %e, $($rest)*);
        }

        val
    }};
}
