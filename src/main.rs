// SPDX-License-Identifier: GPL-3.0-only

use app::Paginate;
use iced::window::Settings;
use tracing_subscriber::EnvFilter;

use crate::paginate::settings;

mod app;
mod i18n;
mod paginate;

fn main() -> Result<(), anywho::Error> {
    // .env may carry RUST_LOG, so it goes in before the subscriber.
    settings::load_env_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let settings = settings::Settings::from_env()?;
    tracing::info!(?settings, "starting simple-paginate");

    iced::application("Simple Paginate", Paginate::update, Paginate::view)
        .theme(Paginate::theme)
        .window(Settings {
            position: iced::window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .run_with(move || Paginate::new(settings))?;

    Ok(())
}
