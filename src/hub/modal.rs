//! Game overlay: `Closed → Open → Closed`, nothing else.

/// What the open overlay shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    /// Embedded frame loading a same-origin proxied path.
    Frame { src: String },
    /// No embedding; offer a link to the game's own URL instead.
    External { href: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open {
        game_id: String,
        title: String,
        content: ModalContent,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    /// Page scrolling is locked exactly while the overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Frame source currently loaded. Empty once closed, which stops any
    /// playing media.
    pub fn frame_src(&self) -> &str {
        match self {
            Modal::Open {
                content: ModalContent::Frame { src },
                ..
            } => src.as_str(),
            _ => "",
        }
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }
}
