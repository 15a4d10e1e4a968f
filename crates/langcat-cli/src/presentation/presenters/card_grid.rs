use langcat_types::Item;

use crate::presentation::view_models::{CardGridViewModel, CardViewModel};

pub const EMPTY_MESSAGE: &str = "No results found.";

pub const LOAD_ERROR_MESSAGE: &str =
    "An error occurred while loading the information. Please try again later.";

pub fn present_skeleton(count: usize) -> CardGridViewModel {
    CardGridViewModel::Skeleton { count }
}

pub fn present_load_error() -> CardGridViewModel {
    CardGridViewModel::Error {
        message: LOAD_ERROR_MESSAGE.to_string(),
    }
}

pub fn present_card(item: &Item) -> CardViewModel {
    CardViewModel {
        title: item.name.clone(),
        description: item.description.clone(),
        image_url: item.image_url.clone(),
        release_line: format!("Release year: {}", item.release_year_label()),
        link: item.link.clone(),
        link_label: "Learn more".to_string(),
        item: item.clone(),
    }
}

/// One card per item in input order, or the empty-state message
pub fn present_cards(items: &[Item]) -> CardGridViewModel {
    if items.is_empty() {
        return CardGridViewModel::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    CardGridViewModel::Cards {
        cards: items.iter().map(present_card).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_yields_message_and_no_cards() {
        let grid = present_cards(&[]);
        assert_eq!(
            grid,
            CardGridViewModel::Empty {
                message: EMPTY_MESSAGE.to_string()
            }
        );
        assert!(grid.cards().is_empty());
        assert_eq!(grid.tile_count(), 0);
    }

    #[test]
    fn test_cards_follow_input_order_and_bind_item() {
        let items = vec![
            Item::new("Rust", "safe systems", 20.0).with_release_year(2015),
            Item::new("Go", "systems", 10.0),
        ];

        let grid = present_cards(&items);
        let cards = grid.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Rust");
        assert_eq!(cards[0].release_line, "Release year: 2015");
        assert_eq!(cards[0].item, items[0]);
        assert_eq!(cards[1].release_line, "Release year: unknown");
    }

    #[test]
    fn test_skeleton_and_error() {
        assert_eq!(present_skeleton(9).tile_count(), 9);
        assert!(matches!(
            present_load_error(),
            CardGridViewModel::Error { message } if message == LOAD_ERROR_MESSAGE
        ));
    }
}
