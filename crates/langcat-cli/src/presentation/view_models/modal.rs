use serde::Serialize;

/// Contents of the detail modal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalViewModel {
    pub title: String,
    pub image_url: String,
    pub release_line: String,
    pub description: String,
    pub link: String,
    pub link_label: String,
}
