//! Text field with a floating label
//!
//! The label sits inside the input as its placeholder until the field is
//! focused or holds text; then it floats above the input border and the
//! placeholder clears.
//!
//! Label placement is driven by [`FloatingLabelController`], a small state
//! machine over [`FieldPhase`]:
//!
//! ```text
//!   BlurredEmpty --focus--> Focused --blur [value empty]--> BlurredEmpty
//!   BlurredFilled --focus--> Focused --blur [value set]--> BlurredFilled
//!   BlurredEmpty <--change--> BlurredFilled   (re-classified on every change)
//! ```
//!
//! Caller callbacks fire after the controller has updated, in event order.

use orchard_core::{Color, StateMachine};
use orchard_theme::Theme;
use tracing::trace;

use super::icon::{Icon, IconStyle};
use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleBag, StyleProp};

/// Underline color of a field without errors
pub const FIELD_BORDER_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);

/// Font size of the floating label
pub const FLOATING_LABEL_FONT_SIZE: f32 = 12.0;

/// Font size of the input text
pub const INPUT_FONT_SIZE: f32 = 16.0;

/// Label placement phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPhase {
    BlurredEmpty,
    BlurredFilled,
    Focused,
}

impl FieldPhase {
    /// Initial phase for an unfocused field holding `value`
    pub fn blurred(value: &str) -> FieldPhase {
        if value.is_empty() {
            FieldPhase::BlurredEmpty
        } else {
            FieldPhase::BlurredFilled
        }
    }

    pub fn shows_label(self) -> bool {
        !matches!(self, FieldPhase::BlurredEmpty)
    }
}

/// Input events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    Change,
}

/// Focus and value of one field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub is_focused: bool,
    pub value: String,
}

impl FieldState {
    pub fn show_label(&self) -> bool {
        self.is_focused || !self.value.is_empty()
    }
}

type FocusCallback = Box<dyn FnMut() + Send>;
/// Transitions a field remembers for debugging
pub const FIELD_HISTORY_LEN: usize = 16;

type ChangeCallback = Box<dyn FnMut(&str) + Send>;

fn has_value(state: &FieldState) -> bool {
    !state.value.is_empty()
}

fn is_empty(state: &FieldState) -> bool {
    state.value.is_empty()
}

/// Owns one field's [`FieldState`] and label phase
pub struct FloatingLabelController {
    machine: StateMachine<FieldPhase, FieldEvent, FieldState>,
    state: FieldState,
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
    on_change_text: Option<ChangeCallback>,
}

impl FloatingLabelController {
    pub fn new(initial_value: impl Into<String>) -> Self {
        let state = FieldState {
            is_focused: false,
            value: initial_value.into(),
        };
        Self {
            machine: Self::machine(FieldPhase::blurred(&state.value)),
            state,
            on_focus: None,
            on_blur: None,
            on_change_text: None,
        }
    }

    fn machine(initial: FieldPhase) -> StateMachine<FieldPhase, FieldEvent, FieldState> {
        use FieldEvent::*;
        use FieldPhase::*;

        StateMachine::builder(initial)
            .on(BlurredEmpty, Focus, Focused)
            .on(BlurredFilled, Focus, Focused)
            .on_if(Focused, Blur, BlurredFilled, has_value)
            .on(Focused, Blur, BlurredEmpty)
            .on_if(BlurredEmpty, Change, BlurredFilled, has_value)
            .on_if(BlurredFilled, Change, BlurredEmpty, is_empty)
            .record_history(FIELD_HISTORY_LEN)
            .build()
    }

    pub fn on_focus<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.on_focus = Some(Box::new(callback));
    }

    pub fn on_blur<F: FnMut() + Send + 'static>(&mut self, callback: F) {
        self.on_blur = Some(Box::new(callback));
    }

    pub fn on_change_text<F: FnMut(&str) + Send + 'static>(&mut self, callback: F) {
        self.on_change_text = Some(Box::new(callback));
    }

    /// Replace the value without notifying callbacks (initial value)
    pub fn seed(&mut self, value: impl Into<String>) {
        self.state.value = value.into();
        self.machine.send(FieldEvent::Change, &self.state);
    }

    pub fn focus(&mut self) {
        self.state.is_focused = true;
        self.transition(FieldEvent::Focus);
        if let Some(callback) = self.on_focus.as_mut() {
            callback();
        }
    }

    pub fn blur(&mut self) {
        self.state.is_focused = false;
        self.transition(FieldEvent::Blur);
        if let Some(callback) = self.on_blur.as_mut() {
            callback();
        }
    }

    /// Store `text`; focus is unchanged
    pub fn change(&mut self, text: impl Into<String>) {
        self.state.value = text.into();
        self.transition(FieldEvent::Change);
        if let Some(callback) = self.on_change_text.as_mut() {
            callback(&self.state.value);
        }
    }

    fn transition(&mut self, event: FieldEvent) {
        let from = self.machine.current_state();
        let to = self.machine.send(event, &self.state);
        trace!("FloatingLabelController - {from:?} --{event:?}--> {to:?}");
    }

    pub fn phase(&self) -> FieldPhase {
        self.machine.current_state()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    pub fn show_label(&self) -> bool {
        self.phase().shows_label()
    }

    /// Placeholder for `label`: the label itself until it floats
    pub fn placeholder<'a>(&self, label: &'a str) -> &'a str {
        if self.show_label() {
            ""
        } else {
            label
        }
    }

    /// The most recent transitions, oldest first
    pub fn history(&self) -> Vec<(FieldPhase, FieldEvent, FieldPhase)> {
        self.machine.history()
    }
}

impl Default for FloatingLabelController {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for FloatingLabelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingLabelController")
            .field("phase", &self.phase())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Helper line under the input
#[derive(Clone, Debug, PartialEq)]
pub struct HelperText {
    pub text: String,
    pub font_size: f32,
    /// `palette.error` when the field is in error
    pub color: Option<Color>,
}

/// Everything the field shows for the current state
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPresentation {
    /// Floating label, when shown
    pub label: Option<String>,
    pub label_color: Color,
    pub placeholder: String,
    pub border_color: Color,
    pub input_padding_left: Option<f32>,
    pub icon: Option<IconStyle>,
    pub helper: Option<HelperText>,
}

/// Text field with a floating label
#[derive(Debug)]
pub struct TextField {
    label: String,
    icon: Option<Icon>,
    helper_text: Option<String>,
    error: bool,
    has_value: bool,
    controller: FloatingLabelController,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            helper_text: None,
            error: false,
            has_value: false,
            controller: FloatingLabelController::default(),
        }
    }

    /// Initial value; wins over [`TextField::default_value`]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.has_value = true;
        self.controller.seed(value);
        self
    }

    /// Initial value used when no explicit value is given
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        if !self.has_value {
            self.controller.seed(value);
        }
        self
    }

    /// Leading icon by glyph name
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(Icon::new(name));
        self
    }

    /// Leading icon, fully configured
    pub fn icon_with(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn on_focus<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.controller.on_focus(callback);
        self
    }

    pub fn on_blur<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.controller.on_blur(callback);
        self
    }

    pub fn on_change_text<F: FnMut(&str) + Send + 'static>(mut self, callback: F) -> Self {
        self.controller.on_change_text(callback);
        self
    }

    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    pub fn focus(&mut self) {
        self.controller.focus();
    }

    pub fn blur(&mut self) {
        self.controller.blur();
    }

    pub fn change_text(&mut self, text: impl Into<String>) {
        self.controller.change(text);
    }

    pub fn controller(&self) -> &FloatingLabelController {
        &self.controller
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn presentation(&self, theme: &Theme) -> FieldPresentation {
        let show_label = self.controller.show_label();
        let icon = self.icon.as_ref().map(|icon| icon.resolve_style(theme));

        FieldPresentation {
            label: show_label.then(|| self.label.clone()),
            label_color: theme.typography.primary_color,
            placeholder: self.controller.placeholder(&self.label).to_string(),
            border_color: if self.error {
                theme.palette.error
            } else {
                FIELD_BORDER_COLOR
            },
            input_padding_left: icon.map(|_| theme.space(8.0)),
            icon,
            helper: self.helper_text.as_ref().map(|text| HelperText {
                text: text.clone(),
                font_size: theme.typography.small_font_size,
                color: self.error.then_some(theme.palette.error),
            }),
        }
    }
}

impl ThemedComponent for TextField {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        let view = self.presentation(theme);

        let floating = view.label.map(|label| {
            Node::text(label).style(
                StyleBag::new()
                    .with(StyleProp::Position, "absolute")
                    .with(StyleProp::Top, -8.0)
                    .with(StyleProp::Left, 12.0)
                    .with(StyleProp::ZIndex, 1.0)
                    .with(StyleProp::PaddingHorizontal, 4.0)
                    .with(StyleProp::FontSize, FLOATING_LABEL_FONT_SIZE)
                    .with(StyleProp::Color, view.label_color)
                    .with(StyleProp::BackgroundColor, theme.palette.background),
            )
        });

        let mut input_style = StyleBag::new()
            .with(StyleProp::Flex, 1.0)
            .with(StyleProp::FontSize, INPUT_FONT_SIZE)
            .with(StyleProp::PaddingVertical, 8.0)
            .with(StyleProp::PaddingHorizontal, 12.0);
        if let Some(padding) = view.input_padding_left {
            input_style.set(StyleProp::PaddingLeft, padding);
        }
        let input = Node::new(NodeKind::TextInput {
            value: self.controller.value().to_string(),
            placeholder: view.placeholder,
        })
        .style(input_style);

        let leading = self
            .icon
            .as_ref()
            .zip(view.icon)
            .map(|(icon, style)| {
                icon.render_styled(style)
                    .prop(StyleProp::Position, "absolute")
            });

        let group = Node::view()
            .style(
                StyleBag::new()
                    .with(StyleProp::FlexDirection, "row")
                    .with(StyleProp::AlignItems, "center")
                    .with(StyleProp::BorderBottomWidth, 1.0)
                    .with(StyleProp::BorderBottomColor, view.border_color),
            )
            .child_opt(leading)
            .child(input);

        let helper = view.helper.map(|helper| {
            let mut style = StyleBag::new()
                .with(StyleProp::FontSize, helper.font_size)
                .with(StyleProp::Left, 12.0);
            if let Some(color) = helper.color {
                style.set(StyleProp::Color, color);
            }
            Node::text(helper.text).style(style)
        });

        Node::view()
            .child(Node::view().child_opt(floating).child(group))
            .child_opt(helper)
    }
}

/// Create a text field labelled `label`
pub fn text_field(label: impl Into<String>) -> TextField {
    TextField::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_focus_change_blur_keeps_label() {
        let mut field = FloatingLabelController::default();
        field.focus();
        field.change("a");
        field.blur();

        assert_eq!(field.phase(), FieldPhase::BlurredFilled);
        assert!(field.show_label());
        assert_eq!(field.placeholder("Name"), "");
    }

    #[test]
    fn test_focus_blur_hides_label() {
        let mut field = FloatingLabelController::default();
        field.focus();
        assert!(field.show_label());
        field.blur();

        assert_eq!(field.phase(), FieldPhase::BlurredEmpty);
        assert!(!field.show_label());
        assert_eq!(field.placeholder("Name"), "Name");
    }

    #[test]
    fn test_change_never_moves_focus() {
        let mut field = FloatingLabelController::default();
        field.change("typed");
        assert!(!field.is_focused());
        assert_eq!(field.phase(), FieldPhase::BlurredFilled);

        field.change("");
        assert_eq!(field.phase(), FieldPhase::BlurredEmpty);

        field.focus();
        field.change("");
        assert_eq!(field.phase(), FieldPhase::Focused);
    }

    #[test]
    fn test_phase_matches_state_definition() {
        let mut field = FloatingLabelController::new("prefilled");
        assert_eq!(field.phase(), FieldPhase::BlurredFilled);

        for event in [
            FieldEvent::Focus,
            FieldEvent::Change,
            FieldEvent::Blur,
            FieldEvent::Change,
            FieldEvent::Blur,
            FieldEvent::Focus,
        ] {
            match event {
                FieldEvent::Focus => field.focus(),
                FieldEvent::Blur => field.blur(),
                FieldEvent::Change if field.value().is_empty() => field.change("x"),
                FieldEvent::Change => field.change(""),
            }
            assert_eq!(field.show_label(), field.state().show_label());
        }
    }

    #[test]
    fn test_callbacks_fire_after_update_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (focus_log, blur_log, change_log) = (log.clone(), log.clone(), log.clone());

        let mut field = text_field("Email")
            .on_focus(move || focus_log.lock().unwrap().push("focus".to_string()))
            .on_blur(move || blur_log.lock().unwrap().push("blur".to_string()))
            .on_change_text(move |text| {
                change_log.lock().unwrap().push(format!("change:{text}"))
            });

        field.focus();
        field.change_text("a@b.c");
        field.blur();
        field.blur();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["focus", "change:a@b.c", "blur", "blur"]
        );
        assert_eq!(field.controller().value(), "a@b.c");
    }

    #[test]
    fn test_initial_value_precedence() {
        assert_eq!(text_field("x").controller().value(), "");
        assert_eq!(text_field("x").default_value("d").controller().value(), "d");
        assert_eq!(
            text_field("x").value("v").default_value("d").controller().value(),
            "v"
        );

        let seeded = text_field("x").value("v");
        assert_eq!(seeded.controller().phase(), FieldPhase::BlurredFilled);
    }

    #[test]
    fn test_history_stays_bounded() {
        let mut field = FloatingLabelController::default();
        for _ in 0..1_000 {
            field.focus();
            field.change("a");
            field.blur();
            field.change("");
        }

        let history = field.history();
        assert_eq!(history.len(), FIELD_HISTORY_LEN);
        assert_eq!(
            history.last(),
            Some(&(FieldPhase::BlurredFilled, FieldEvent::Change, FieldPhase::BlurredEmpty))
        );
    }

    #[test]
    fn test_presentation() {
        let theme = ThemePreset::Orange.theme();
        let field = text_field("Password").icon("lock").helper_text("Required");

        let view = field.presentation(&theme);
        assert_eq!(view.label, None);
        assert_eq!(view.placeholder, "Password");
        assert_eq!(view.border_color, FIELD_BORDER_COLOR);
        assert_eq!(view.input_padding_left, Some(theme.space(8.0)));
        assert_eq!(
            view.icon,
            Some(IconStyle {
                color: theme.typography.primary_color,
                size: theme.typography.icon_size,
            })
        );
        let helper = view.helper.unwrap();
        assert_eq!(helper.font_size, theme.typography.small_font_size);
        assert_eq!(helper.color, None);

        let field = field.error(true).value("hunter2");
        let view = field.presentation(&theme);
        assert_eq!(view.label.as_deref(), Some("Password"));
        assert_eq!(view.label_color, theme.typography.primary_color);
        assert_ne!(view.label_color, theme.typography.secondary_color);
        assert_eq!(view.placeholder, "");
        assert_eq!(view.border_color, theme.palette.error);
        assert_eq!(view.helper.unwrap().color, Some(theme.palette.error));
    }

    #[test]
    fn test_render_floats_label() {
        let theme = ThemePreset::Orange.theme();
        let mut field = text_field("Name");
        assert!(!field.render(&theme).text_content().contains("Name"));

        field.focus();
        let node = field.render(&theme);
        assert_eq!(node.text_content(), "Name");
        let input = node
            .find(|n| matches!(n.kind, NodeKind::TextInput { .. }))
            .unwrap();
        assert!(matches!(
            &input.kind,
            NodeKind::TextInput { placeholder, .. } if placeholder.is_empty()
        ));
    }
}
