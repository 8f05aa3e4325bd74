use launcher_core::{Launcher, LauncherConfig, StoragePaths};
use parking_lot::Mutex;
use tauri::Manager;

mod app;
mod commands;

/// The single launcher instance, serialized behind one lock.
pub(crate) type LauncherState = Mutex<Launcher>;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    commands::logging::install_logger();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // A second launch brings the running launcher forward
            let app = app.clone();
            tauri::async_runtime::spawn(async move {
                if let Err(e) = commands::launcher::show_launcher(&app) {
                    log::error!("Failed to show launcher for second instance: {}", e);
                }
            });
        }))
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init())
        .on_window_event(app::events::handle_window_event)
        .on_menu_event(app::tray::handle_menu_event)
        .invoke_handler(tauri::generate_handler![
            // Launcher bar
            commands::launcher::pointer_down,
            commands::launcher::pointer_move,
            commands::launcher::pointer_up,
            commands::launcher::open_tool,
            commands::launcher::show_context_menu,
            commands::launcher::hide_to_tray,
            commands::launcher::quit_app,
            // Logging
            commands::logging::write_log,
        ])
        .setup(|app| {
            if let Err(e) = commands::logging::init_logging(app.handle()) {
                log::warn!("File logging unavailable: {}", e);
            }

            let paths = StoragePaths::resolve();
            let config = LauncherConfig::load_or_default(&paths.config);
            log::info!("SuiteView starting (data in {})", paths.geometry.display());

            let screen = commands::window::primary_screen(app.handle());
            let factory = commands::window::TauriWindowFactory::new(app.handle().clone());
            let launcher = Launcher::new(config, &paths, Box::new(factory), screen);
            app.manage(LauncherState::new(launcher));

            app::tray::init(app)?;

            // The launcher window is declared hidden; it appears once placed
            commands::launcher::show_launcher(app.handle())?;

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
