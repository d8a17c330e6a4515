//! JSON command protocol for headless and scripted sessions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shared::EnvironmentPreset;

use crate::controller::SceneController;
use crate::error::EditorError;
use crate::state::{LightEdit, LightTarget, PropertyEdit};

/// A command a script or agent can execute against an editor session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a default box and select it
    AddBox,
    /// Add a default sphere and select it
    AddSphere,
    /// Add the bundled sample model
    AddSampleModel,
    /// Read a .glb/.gltf file and add it as a model
    ImportModel { path: PathBuf },
    /// Select an object by ID.
    Select { id: String },
    /// Clear selection.
    ClearSelection,
    /// Edit a property of `id`, or of the selected object when `id` is omitted
    Edit {
        #[serde(default)]
        id: Option<String>,
        edit: PropertyEdit,
    },
    /// Delete the selected object.
    DeleteSelected,
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    SetLight { light: LightTarget, edit: LightEdit },
    SetEnvironment { preset: EnvironmentPreset },
    ResetCamera,
    /// Inspect the scene: objects, selection and history position.
    Inspect,
    /// Export the scene as JSON.
    ExportScene,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(e: &EditorError) -> Self {
        Self {
            success: false,
            error: Some(e.to_string()),
            data: None,
        }
    }

    fn from_result<T>(
        result: Result<T, EditorError>,
        data: impl FnOnce(T) -> serde_json::Value,
    ) -> Self {
        match result {
            Ok(v) => Self::ok_with_data(data(v)),
            Err(e) => Self::err(&e),
        }
    }
}

fn inspect(editor: &SceneController) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = editor
        .objects()
        .iter()
        .map(|obj| {
            serde_json::json!({
                "id": obj.id,
                "name": obj.name,
                "kind": obj.kind.label(),
                "position": obj.position,
                "rotation": obj.rotation,
                "scale": obj.scale,
            })
        })
        .collect();
    let history = editor.history();
    serde_json::json!({
        "object_count": objects.len(),
        "objects": objects,
        "selected": editor.selection().current(),
        "history": {
            "len": history.len(),
            "cursor": history.cursor(),
            "can_undo": history.can_undo(),
            "can_redo": history.can_redo(),
        },
        "environment": editor.lighting().environment,
    })
}

/// Execute a single command on the editor.
pub async fn execute_command(editor: &mut SceneController, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddBox => {
            CommandResponse::from_result(editor.add_box(), |id| serde_json::json!({ "id": id }))
        }

        EditorCommand::AddSphere => {
            CommandResponse::from_result(editor.add_sphere(), |id| serde_json::json!({ "id": id }))
        }

        EditorCommand::AddSampleModel => CommandResponse::from_result(
            editor.add_sample_model(),
            |id| serde_json::json!({ "id": id }),
        ),

        EditorCommand::ImportModel { path } => CommandResponse::from_result(
            editor.import_model(path).await,
            |id| serde_json::json!({ "id": id }),
        ),

        EditorCommand::Select { id } => {
            editor.select(id.clone());
            CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
        }

        EditorCommand::ClearSelection => {
            editor.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::Edit { id, edit } => match id {
            Some(id) => CommandResponse::from_result(editor.edit_property(&id, edit), |_| {
                serde_json::json!({ "edited": true })
            }),
            None => CommandResponse::from_result(editor.edit_selected(edit), |edited| {
                serde_json::json!({ "edited": edited })
            }),
        },

        EditorCommand::DeleteSelected => {
            let removed = editor.delete_selected();
            CommandResponse::ok_with_data(serde_json::json!({
                "removed": removed.as_ref().map(|o| &o.id),
                "name": removed.as_ref().map(|o| &o.name),
            }))
        }

        EditorCommand::Undo => {
            let success = editor.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = editor.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::SetLight { light, edit } => {
            CommandResponse::from_result(editor.update_light(light, edit), |_| {
                serde_json::json!({ "light": light })
            })
        }

        EditorCommand::SetEnvironment { preset } => {
            editor.set_environment(preset);
            CommandResponse::ok_with_data(serde_json::json!({ "environment": preset }))
        }

        EditorCommand::ResetCamera => {
            editor.reset_camera();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => CommandResponse::ok_with_data(inspect(editor)),

        EditorCommand::ExportScene => {
            let json = serde_json::to_string_pretty(&editor.describe()).unwrap_or_default();
            CommandResponse::ok_with_data(serde_json::json!({ "scene_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub async fn execute_json(editor: &mut SceneController, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(editor, cmd).await)
}

/// Parse and execute multiple JSON commands (array).
pub async fn execute_json_batch(
    editor: &mut SceneController,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    let mut responses = Vec::with_capacity(cmds.len());
    for cmd in cmds {
        responses.push(execute_command(editor, cmd).await);
    }
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::empty_controller;
    use shared::Axis;

    #[test]
    fn test_command_serde_undo() {
        let json = r#"{"command": "undo"}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, EditorCommand::Undo));
    }

    #[test]
    fn test_command_serde_edit() {
        let json = r#"{"command": "edit", "edit": {"group": "vector", "field": "position", "axis": "y", "value": 5.0}}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EditorCommand::Edit { id, edit } => {
                assert!(id.is_none());
                assert_eq!(edit, PropertyEdit::position(Axis::Y, 5.0));
            }
            _ => panic!("Expected Edit"),
        }
    }

    #[test]
    fn test_command_serde_set_light() {
        let json = r#"{"command": "set_light", "light": "point", "edit": {"field": "intensity", "value": 0.8}}"#;
        let cmd: EditorCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EditorCommand::SetLight { light, edit } => {
                assert_eq!(light, LightTarget::Point);
                assert_eq!(edit, LightEdit::Intensity(0.8));
            }
            _ => panic!("Expected SetLight"),
        }
    }

    #[tokio::test]
    async fn test_execute_add_box() {
        let mut c = empty_controller();
        let resp = execute_json(&mut c, r#"{"command": "add_box"}"#).await.unwrap();
        assert!(resp.success);
        assert!(resp.data.unwrap()["id"].as_str().is_some());
        assert_eq!(c.objects().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_inspect() {
        let mut c = empty_controller();
        c.add_box().unwrap();
        c.add_sphere().unwrap();

        let resp = execute_json(&mut c, r#"{"command": "inspect"}"#).await.unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["object_count"], 2);
        assert_eq!(data["history"]["len"], 3);
        assert_eq!(data["history"]["cursor"], 2);
        assert_eq!(data["objects"][1]["kind"], "Sphere");
    }

    #[tokio::test]
    async fn test_execute_edit_missing_object_fails() {
        let mut c = empty_controller();
        let json = r#"{"command": "edit", "id": "ghost", "edit": {"group": "wireframe", "value": true}}"#;
        let resp = execute_json(&mut c, json).await.unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("ghost"));
    }

    #[tokio::test]
    async fn test_execute_invalid_json() {
        let mut c = empty_controller();
        let result = execute_json(&mut c, "not valid json").await;
        assert!(result.is_err());
    }
}
