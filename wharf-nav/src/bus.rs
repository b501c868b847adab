use tokio::sync::broadcast;

// Typed replacement for the string-keyed event dispatch the UI layers use to
// talk across components: navigation intents, tool invocations, gallery
// opens, and archive extraction requests.
#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    Navigate(String),
    Pathname(String),
    Tool(String),
    Gallery(String),
    Extract {
        inner_path: String,
        archive_password: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BusEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BusEvent> {
        self.tx.subscribe()
    }

    // Number of subscribers the event reached; an event with no listeners is
    // not an error.
    pub fn emit(&self, event: BusEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}
