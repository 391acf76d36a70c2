use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Course video from the e-learning side of the platform. The admin screen
/// only lists these; creation stays on the course tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub group: VideoGroup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGroup {
    pub id: String,
    pub title: String,
}

/// Video group as the course endpoint returns it, with its display
/// metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoPayload {
    #[validate(length(min = 1, message = "Título é obrigatório"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(url(message = "URL do vídeo inválida"))]
    pub url: String,
    pub duration_minutes: u32,
    #[validate(length(min = 1, message = "Grupo do vídeo é obrigatório"))]
    pub video_group_id: String,
    #[validate(length(min = 1, message = "Curso é obrigatório"))]
    pub course_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_video_is_rejected() {
        let payload = CreateVideoPayload {
            title: String::new(),
            description: None,
            url: "https://example.com/aula1.mp4".to_string(),
            duration_minutes: 12,
            video_group_id: "g-1".to_string(),
            course_id: "c-1".to_string(),
            image_id: None,
            thumbnail_id: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn group_tolerates_missing_metadata() {
        let group: CourseGroup = serde_json::from_value(serde_json::json!({
            "id": "g-1",
            "title": "Módulo 1"
        }))
        .unwrap();
        assert!(group.description.is_none());
    }
}
