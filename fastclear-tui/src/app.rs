use std::sync::Arc;

use fastclear_core::{
    model::{LoadSize, QuoteSelection, WasteCategory},
    service::QuoteService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    CustomerName,
    Phone,
    Email,
    Postcode,
    Address,
    WasteType,
    LoadSize,
    DateTime,
    Extras,
    Notes,
    Agree,
    CopyButton,
    SubmitButton,
}

impl Field {
    /// Focus traversal order, top to bottom.
    pub(crate) const ORDER: [Field; 13] = [
        Field::CustomerName,
        Field::Phone,
        Field::Email,
        Field::Postcode,
        Field::Address,
        Field::WasteType,
        Field::LoadSize,
        Field::DateTime,
        Field::Extras,
        Field::Notes,
        Field::Agree,
        Field::CopyButton,
        Field::SubmitButton,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub(crate) fn info<S: Into<String>>(text: S) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub(crate) fn error<S: Into<String>>(text: S) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub(crate) struct App {
    pub service: Arc<QuoteService>,

    pub selection: QuoteSelection,
    pub focus: usize,
    pub extra_cursor: usize,

    pub is_submitting: bool,
    pub notice: Option<Notice>,
}

impl App {
    pub(crate) fn new(service: Arc<QuoteService>) -> Self {
        Self {
            service,
            selection: QuoteSelection::new(),
            focus: 0,
            extra_cursor: 0,
            is_submitting: false,
            notice: None,
        }
    }

    pub(crate) fn focused_field(&self) -> Field {
        Field::ORDER
            .get(self.focus)
            .copied()
            .unwrap_or(Field::CustomerName)
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = if self.focus + 1 < Field::ORDER.len() {
            self.focus + 1
        } else {
            0
        };
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            Field::ORDER.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// The editable buffer backing a text field, if the field has one.
    pub(crate) fn text_field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::CustomerName => Some(&mut self.selection.customer_name),
            Field::Phone => Some(&mut self.selection.phone),
            Field::Email => Some(&mut self.selection.email),
            Field::Postcode => Some(&mut self.selection.postcode),
            Field::Address => Some(&mut self.selection.address),
            Field::DateTime => Some(&mut self.selection.date_time),
            Field::Notes => Some(&mut self.selection.notes),
            _ => None,
        }
    }

    pub(crate) fn cycle_category(&mut self, forward: bool) {
        self.selection.category = cycle(self.selection.category, &WasteCategory::ALL, forward);
    }

    pub(crate) fn cycle_load_size(&mut self, forward: bool) {
        self.selection.load_size = cycle(self.selection.load_size, &LoadSize::ALL, forward);
    }

    pub(crate) fn move_extra_cursor(&mut self, forward: bool) {
        let count = self.service.extras().len();
        if forward {
            if self.extra_cursor + 1 < count {
                self.extra_cursor += 1;
            }
        } else if self.extra_cursor > 0 {
            self.extra_cursor -= 1;
        }
    }

    pub(crate) fn toggle_focused_extra(&mut self) {
        if let Some(extra) = self.service.extras().get(self.extra_cursor) {
            let id = extra.id.clone();
            self.selection.toggle_extra(&id);
        }
    }

    pub(crate) fn submit_label(&self) -> &'static str {
        if self.selection.ready_to_book() {
            "Confirm & request booking"
        } else {
            "Complete required fields"
        }
    }
}

/// Step a select field through unset and each option, wrapping around.
fn cycle<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let mut ring: Vec<Option<T>> = Vec::with_capacity(options.len() + 1);
    ring.push(None);
    ring.extend(options.iter().copied().map(Some));

    let position = ring.iter().position(|entry| *entry == current).unwrap_or(0);
    let last = ring.len() - 1;
    let next = if forward {
        if position == last { 0 } else { position + 1 }
    } else if position == 0 {
        last
    } else {
        position - 1
    };

    ring.get(next).copied().flatten()
}
