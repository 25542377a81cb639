use anyhow::Result;
use nestcalc::console::StdioConsole;
use nestcalc::{App, Config};

fn main() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let console = StdioConsole::new(config.color);
    let mut app = App::new(config, console);
    app.run()?;

    Ok(())
}
