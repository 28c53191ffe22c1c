use std::io;

use folio_tui::AppConfig;

fn main() -> io::Result<()> {
    folio_tui::run(AppConfig::default())
}
