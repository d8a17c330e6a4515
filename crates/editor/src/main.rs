use std::io::Read;

use scene_editor_lib::command::execute_json_batch;
use scene_editor_lib::state::EditorSettings;
use scene_editor_lib::SceneController;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scene_editor=info,scene_editor_lib=info".into()),
        )
        .init();

    let Some(script) = read_script() else {
        std::process::exit(1);
    };

    let settings = EditorSettings::load();
    let mut editor = SceneController::new(&settings);

    match execute_json_batch(&mut editor, &script).await {
        Ok(responses) => {
            for resp in &responses {
                match serde_json::to_string(resp) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::error!("Failed to serialize response: {e}"),
                }
            }
        }
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }

    for note in editor.drain_notifications() {
        tracing::debug!(severity = ?note.severity, "Toast: {} - {}", note.title, note.description);
    }
}

/// Command script from `--script <path>`, or stdin when no path is given
fn read_script() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--script" && i + 1 < args.len() {
            let path = &args[i + 1];
            return match std::fs::read_to_string(path) {
                Ok(json) => {
                    tracing::info!("Loaded command script from {path}");
                    Some(json)
                }
                Err(e) => {
                    tracing::error!("Failed to read script file {path}: {e}");
                    None
                }
            };
        }
        i += 1;
    }

    let mut json = String::new();
    match std::io::stdin().read_to_string(&mut json) {
        Ok(_) => Some(json),
        Err(e) => {
            tracing::error!("Failed to read commands from stdin: {e}");
            None
        }
    }
}
