use backdrop::{Backdrop, ThemeId};

fn main() {
    // Unknown names refuse the switch and keep the default theme running.
    let theme = match std::env::args().nth(1) {
        Some(name) => match name.parse::<ThemeId>() {
            Ok(id) => id,
            Err(e) => {
                eprintln!("{}", e);
                ThemeId::default()
            }
        },
        None => ThemeId::default(),
    };

    if let Err(e) = Backdrop::new()
        .with_theme(theme)
        .with_title("backdrop")
        .run()
    {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
