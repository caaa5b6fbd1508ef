//! Tour use case: press the previous/next button a number of times

use crate::application::PinStore;
use crate::domain::{Direction, PinCursor, Region};
use crate::infrastructure::PinStorage;

/// One button press worth of output
#[derive(Debug, Clone, PartialEq)]
pub struct TourStop {
    pub row: usize,
    pub title: String,
    pub region: Region,
}

/// Step a fresh cursor `steps` times in `direction`, collecting the
/// regions the map would focus on. Empty when there are no pins.
pub fn tour<S: PinStorage>(
    store: &PinStore<S>,
    direction: Direction,
    steps: usize,
    span: f64,
) -> Vec<TourStop> {
    let mut cursor = PinCursor::new();
    let mut stops = Vec::with_capacity(steps);

    for _ in 0..steps {
        let Some(row) = cursor.step(store.len(), direction) else {
            break;
        };
        let Ok(pin) = store.get(row) else {
            break;
        };
        stops.push(TourStop {
            row,
            title: pin.title.clone(),
            region: Region::around(pin.coordinate(), span),
        });
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pin;
    use crate::infrastructure::MemoryStorage;

    fn store_with(titles: &[&str]) -> PinStore<MemoryStorage> {
        let mut store = PinStore::new(MemoryStorage::new());
        for (i, title) in titles.iter().enumerate() {
            store
                .save(Pin::new(*title, "somewhere", i as f64, i as f64))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_tour_empty_store() {
        let store = store_with(&[]);
        assert!(tour(&store, Direction::Next, 3, 10.0).is_empty());
    }

    #[test]
    fn test_tour_forward() {
        let store = store_with(&["A", "B", "C"]);
        let rows: Vec<_> = tour(&store, Direction::Next, 4, 10.0)
            .into_iter()
            .map(|stop| stop.row)
            .collect();
        assert_eq!(rows, vec![0, 1, 2, 2]);
    }

    #[test]
    fn test_tour_backward_stays_at_first() {
        let store = store_with(&["A", "B"]);
        let stops = tour(&store, Direction::Previous, 2, 5.0);
        assert_eq!(stops.len(), 2);
        assert!(stops.iter().all(|stop| stop.row == 0 && stop.title == "A"));
        assert_eq!(stops[0].region.latitude_delta, 5.0);
    }
}
