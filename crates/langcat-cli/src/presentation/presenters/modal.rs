use langcat_types::Item;

use crate::presentation::view_models::ModalViewModel;

pub fn present_modal(item: &Item) -> ModalViewModel {
    ModalViewModel {
        title: item.name.clone(),
        image_url: item.image_url.clone(),
        release_line: format!("Release year: {}", item.release_year_label()),
        description: item.description.clone(),
        link: item.link.clone(),
        link_label: "Official documentation".to_string(),
    }
}
