use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = poliscope_report::Args::parse();

	poliscope_report::run(args)
}
