use super::view::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open(Selection),
    BackdropClick,
    CloseButton,
    /// Clicks inside the content box do not reach the backdrop.
    ContentClick,
    KeyDown(Key),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Selection),
}

/// Page scroll suspension. Locking and releasing are both idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Full-size view of one selected cell.
#[derive(Debug, Clone, Default)]
pub struct EnlargeModal {
    state: ModalState,
    scroll: ScrollLock,
}

impl EnlargeModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            ModalState::Open(s) => Some(s),
            ModalState::Closed => None,
        }
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        self.scroll
    }

    /// Applies one event; returns whether the open/closed state changed.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        let was_open = self.is_open();
        match event {
            ModalEvent::Open(selection) => {
                self.state = ModalState::Open(selection);
                self.scroll.lock();
            }
            ModalEvent::BackdropClick | ModalEvent::CloseButton => self.close(),
            ModalEvent::KeyDown(Key::Escape) if was_open => self.close(),
            ModalEvent::KeyDown(_) | ModalEvent::ContentClick => {}
        }
        was_open != self.is_open()
    }

    fn close(&mut self) {
        self.state = ModalState::Closed;
        // released even when already closed
        self.scroll.release();
    }
}
