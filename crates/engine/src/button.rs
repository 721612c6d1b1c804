//! Description of the two controls an editor renders for the builder. No
//! rendering happens here; a UI layer draws from [`ButtonProps`] and reports
//! back a [`ButtonEvent`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub btn_class: String,
    pub color_class: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            btn_class: "btn".to_string(),
            color_class: "btn-success".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonProps {
    pub label: String,
    pub loading: bool,
    pub style: ButtonStyle,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: "Submit".to_string(),
            loading: false,
            style: ButtonStyle::default(),
        }
    }
}

impl ButtonProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn color(mut self, color_class: impl Into<String>) -> Self {
        self.style.color_class = color_class.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Save,
    Cancel,
}

/// A click reported by the UI, tagged with the control that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Clicked(ButtonAction),
}
