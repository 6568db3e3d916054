//! Single-slot transient notice.
//!
//! Each `show` bumps the generation. The page schedules an expire callback
//! carrying that generation; a callback whose generation is no longer current
//! is ignored, so the last notice always gets its full display time.

/// A notice currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub generation: u64,
    pub hide_after_ms: u32,
}

#[derive(Debug, Default, Clone)]
pub struct Toast {
    current: Option<Notice>,
    generation: u64,
}

impl Toast {
    /// Replace whatever is showing with `message`.
    pub fn show(&mut self, message: impl Into<String>, hide_after_ms: u32) -> Notice {
        self.generation += 1;
        let notice = Notice {
            message: message.into(),
            generation: self.generation,
            hide_after_ms,
        };
        self.current = Some(notice.clone());
        notice
    }

    /// Hide the notice if `generation` is still the one on screen.
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
