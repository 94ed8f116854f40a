use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Width reserved for the field name column so the inputs line up.
pub(crate) const LABEL_WIDTH: usize = 8;

/// Text typed into the three entry fields.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) id: String,
    pub(crate) active: BookField,
}

/// Fields available within the book form, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Id,
}

impl BookField {
    pub(crate) const ALL: [BookField; 3] = [BookField::Title, BookField::Author, BookField::Id];

    pub(crate) fn name(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Id => "ID",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            BookField::Title => "Enter Book Title",
            BookField::Author => "Enter Book Author",
            BookField::Id => "Enter Book ID",
        }
    }

    /// Row offset of the field inside the form block.
    pub(crate) fn row(self) -> u16 {
        match self {
            BookField::Title => 0,
            BookField::Author => 1,
            BookField::Id => 2,
        }
    }
}

impl BookForm {
    /// Move focus forward (Title → Author → ID → Title).
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Id,
            BookField::Id => BookField::Title,
        };
    }

    /// Move focus backward.
    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Id,
            BookField::Author => BookField::Title,
            BookField::Id => BookField::Author,
        };
    }

    fn value_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Id => &mut self.id,
        }
    }

    fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Id => &self.id,
        }
    }

    /// Append a character to the active field. Control characters are
    /// ignored; the ID field takes any printable text and leaves parsing to
    /// the add/delete handlers.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let field = self.active;
        self.value_mut(field).push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    pub(crate) fn clear_id(&mut self) {
        self.id.clear();
    }

    /// Empty every field and return focus to the title.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render one field row, greying out the placeholder when empty.
    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            field.placeholder().to_string()
        } else {
            value.to_string()
        };

        let style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let label = format!("{}:", field.name());
        Line::from(vec![
            Span::raw(format!("{:<width$}", label, width = LABEL_WIDTH)),
            Span::styled(display, style),
        ])
    }

    /// Character count of the requested field.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }
}

/// Pending "clear every book" confirmation.
pub(crate) struct ConfirmClear {
    pub(crate) count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut form = BookForm::default();
        assert_eq!(form.active, BookField::Title);
        form.next_field();
        assert_eq!(form.active, BookField::Author);
        form.next_field();
        assert_eq!(form.active, BookField::Id);
        form.next_field();
        assert_eq!(form.active, BookField::Title);
        form.previous_field();
        assert_eq!(form.active, BookField::Id);
    }

    #[test]
    fn typing_goes_to_active_field() {
        let mut form = BookForm::default();
        for ch in "Dune".chars() {
            assert!(form.push_char(ch));
        }
        form.next_field();
        form.push_char('F');
        form.next_field();
        form.push_char('4');
        form.push_char('x');

        assert_eq!(form.title, "Dune");
        assert_eq!(form.author, "F");
        assert_eq!(form.id, "4x");
        assert!(!form.push_char('\n'));

        form.backspace();
        assert_eq!(form.id, "4");
        assert_eq!(form.value_len(BookField::Title), 4);
    }

    #[test]
    fn reset_and_clear_id() {
        let mut form = BookForm {
            title: "T".into(),
            author: "A".into(),
            id: "9".into(),
            active: BookField::Id,
        };
        form.clear_id();
        assert_eq!(form.id, "");
        assert_eq!(form.title, "T");

        form.reset();
        assert_eq!(form.title, "");
        assert_eq!(form.author, "");
        assert_eq!(form.active, BookField::Title);
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let form = BookForm::default();
        let line = form.build_line(BookField::Author);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "Author: Enter Book Author");
    }
}
