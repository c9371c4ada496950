/// The popup forms the dashboard can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddEmployee,
    ApplyLeave,
    MonthlySummary,
}

// Field positions, per form
pub const EMPLOYEE_NAME: usize = 0;
pub const EMPLOYEE_BALANCE: usize = 1;

pub const LEAVE_EMPLOYEE_ID: usize = 0;
pub const LEAVE_TYPE: usize = 1;
pub const LEAVE_START: usize = 2;
pub const LEAVE_END: usize = 3;

pub const SUMMARY_EMPLOYEE_ID: usize = 0;
pub const SUMMARY_MONTH: usize = 1;
pub const SUMMARY_YEAR: usize = 2;

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddEmployee => " Add Employee ",
            Self::ApplyLeave => " Apply Leave ",
            Self::MonthlySummary => " Monthly Summary ",
        }
    }

    /// (label, placeholder) for each field, in tab order
    fn fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::AddEmployee => &[("Name", ""), ("Leave balance", "20")],
            Self::ApplyLeave => &[
                ("Employee ID", ""),
                ("Leave type", "Casual"),
                ("Start date", "YYYY-MM-DD"),
                ("End date", "YYYY-MM-DD"),
            ],
            Self::MonthlySummary => &[
                ("Employee ID", ""),
                ("Month", "1-12"),
                ("Year", "current year"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub validation_error: Option<String>,
    /// Set while the request is in flight; the form closes when it succeeds
    pub submitting: bool,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let fields = kind
            .fields()
            .iter()
            .map(|&(label, placeholder)| FormField {
                label,
                placeholder,
                value: String::new(),
            })
            .collect();

        Self {
            kind,
            fields,
            focused: 0,
            validation_error: None,
            submitting: false,
        }
    }

    pub fn with_value(mut self, index: usize, value: impl Into<String>) -> Self {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
        self
    }

    /// Raw value of a field, empty if the index is out of range
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or_default()
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
        }
        self.validation_error = None;
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
        self.validation_error = None;
    }

    pub fn clear_focused(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.clear();
        }
        self.validation_error = None;
    }
}
