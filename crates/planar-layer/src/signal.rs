use crate::shape::ShapeId;

type Subscriber = Box<dyn FnMut(Option<ShapeId>)>;

/// "Selected shape changed" notification for UI panels.
///
/// `None` means nothing is selected any more.
#[derive(Default)]
pub struct SelectionSignal {
    subscribers: Vec<Subscriber>,
}

impl SelectionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(Option<ShapeId>) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    pub fn publish(&mut self, selected: Option<ShapeId>) {
        for sub in &mut self.subscribers {
            sub(selected);
        }
    }
}

impl std::fmt::Debug for SelectionSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSignal").field("subscribers", &self.subscribers.len()).finish()
    }
}
