use super::generator::MoodRequest;

pub const EMOJI_PRESETS: [&str; 6] = ["🎷", "📚", "🌧️", "🌲", "🚀", "👾"];
pub const EMOJI_MAX_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Emoji,
    Description,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Name,
        FormField::Emoji,
        FormField::Description,
        FormField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Input state of the "Create a Custom Mood" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomMoodForm {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub focus: FormField,
}

impl CustomMoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        [&self.name, &self.emoji, &self.description]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// The generator request, or `None` while any field is blank.
    pub fn request(&self) -> Option<MoodRequest> {
        self.is_valid().then(|| MoodRequest {
            name: self.name.trim().to_string(),
            emoji: self.emoji.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Emoji => {
                if self.emoji.chars().count() < EMOJI_MAX_CHARS {
                    self.emoji.push(c);
                }
            }
            FormField::Description => self.description.push(c),
            FormField::Submit => {}
        }
    }

    pub fn paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.input(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = match self.focus {
            FormField::Name => &mut self.name,
            FormField::Emoji => &mut self.emoji,
            FormField::Description => &mut self.description,
            FormField::Submit => return,
        };
        field.pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn selected_preset(&self) -> Option<usize> {
        EMOJI_PRESETS.iter().position(|p| *p == self.emoji)
    }

    /// Steps through the emoji presets, replacing whatever was typed.
    pub fn cycle_preset(&mut self, forward: bool) {
        let len = EMOJI_PRESETS.len();
        let next = match (self.selected_preset(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.emoji = EMOJI_PRESETS[next].to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomMoodForm {
        CustomMoodForm {
            name: "Cosmic Jazz".to_string(),
            emoji: "🎷".to_string(),
            description: "Late night jazz in a space lounge".to_string(),
            focus: FormField::Name,
        }
    }

    #[test]
    fn any_blank_field_invalidates() {
        assert!(filled().request().is_some());

        let mut form = filled();
        form.name = "   ".to_string();
        assert!(form.request().is_none());

        let mut form = filled();
        form.emoji.clear();
        assert!(!form.is_valid());

        let mut form = filled();
        form.description.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = CustomMoodForm::new();
        form.paste("Rain");
        form.focus_next();
        form.input('🌲');
        form.focus_next();
        form.paste("wet\nforest");
        form.backspace();

        assert_eq!(form.name, "Rain");
        assert_eq!(form.emoji, "🌲");
        assert_eq!(form.description, "wetfores");
    }

    #[test]
    fn emoji_is_capped() {
        let mut form = CustomMoodForm {
            focus: FormField::Emoji,
            ..Default::default()
        };
        form.paste("abc");
        assert_eq!(form.emoji, "ab");
    }

    #[test]
    fn focus_wraps() {
        assert_eq!(FormField::Submit.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Submit);
    }

    #[test]
    fn presets_cycle() {
        let mut form = CustomMoodForm::new();
        form.cycle_preset(true);
        assert_eq!(form.emoji, "🎷");
        form.cycle_preset(false);
        assert_eq!(form.emoji, "👾");
        assert_eq!(form.selected_preset(), Some(5));
    }
}
