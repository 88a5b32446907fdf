use structopt::StructOpt;

mod command;
mod options;
mod trace;

fn main() -> eyre::Result<()> {
    let options = options::Options::from_args();
    trace::init(options.pretty);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    command::run(&options.command, &mut stdin.lock(), &mut stdout.lock())
}
