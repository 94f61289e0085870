use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = renumber::cli::parse();
    app::run(args)
}
