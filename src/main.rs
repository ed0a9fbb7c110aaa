use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = fix_filenames::cli::parse();
    app::run(args)
}
