//! Console state and key handling
//!
//! Key presses are turned into an [`Action`] synchronously; actions that
//! need the API are then run through [`App::perform`]. The local employee
//! cache only changes after the server confirms an operation.

use crossterm::event::{Event, KeyCode, KeyEvent};
use shared::response::MSG_REQUIRED_FIELDS;
use shared::{Employee, EmployeeCreate, EmployeeUpdate, Patch, parse_salary};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::backend::EmployeeBackend;

/// Form field labels, in display order
pub const FIELD_LABELS: [&str; 4] = ["Name", "Email", "Position", "Salary"];

const NAME: usize = 0;
const EMAIL: usize = 1;
const POSITION: usize = 2;
const SALARY: usize = 3;

/// Four text inputs shared by the add form and the row editor
#[derive(Debug, Default, Clone)]
pub struct EmployeeForm {
    pub fields: [Input; 4],
    pub focus: usize,
}

impl EmployeeForm {
    /// Prefill from an existing record; no salary is an empty field
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            fields: [
                Input::new(employee.name.clone()),
                Input::new(employee.email.clone()),
                Input::new(employee.position.clone()),
                Input::new(employee.salary.map(|s| s.to_string()).unwrap_or_default()),
            ],
            focus: 0,
        }
    }

    pub fn value(&self, field: usize) -> &str {
        self.fields[field].value()
    }

    pub fn focused(&self) -> &Input {
        &self.fields[self.focus]
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Forward an editing key to the focused input
    pub fn handle_event(&mut self, event: &Event) {
        self.fields[self.focus].handle_event(event);
    }

    fn salary(&self) -> Result<Option<i64>, String> {
        parse_salary(self.value(SALARY)).map_err(|e| e.to_string())
    }

    /// Build a create request, or the message to show instead of sending one
    pub fn to_create(&self) -> Result<EmployeeCreate, String> {
        let blank = |field| self.value(field).trim().is_empty();
        if blank(NAME) || blank(EMAIL) || blank(POSITION) {
            return Err(MSG_REQUIRED_FIELDS.to_string());
        }

        Ok(EmployeeCreate::new(
            self.value(NAME),
            self.value(EMAIL),
            self.value(POSITION),
            self.salary()?,
        ))
    }

    /// Build an update carrying every field of the edit buffer
    ///
    /// An empty salary is sent as an explicit clear.
    pub fn to_update(&self) -> Result<EmployeeUpdate, String> {
        Ok(EmployeeUpdate {
            name: Patch::Set(self.value(NAME).to_string()),
            email: Patch::Set(self.value(EMAIL).to_string()),
            position: Patch::Set(self.value(POSITION).to_string()),
            salary: Patch::Set(self.salary()?),
        })
    }
}

/// What the console is doing with the keyboard
///
/// The add form and the row editor are exclusive, so at most one row is
/// ever being edited.
#[derive(Debug, Default, Clone)]
pub enum Mode {
    #[default]
    Browse,
    Adding(EmployeeForm),
    Editing { id: i64, form: EmployeeForm },
}

/// Result of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Refresh,
    SubmitAdd,
    SaveEdit,
    DeleteSelected,
}

impl Action {
    /// Whether the action talks to the API
    pub fn needs_backend(self) -> bool {
        matches!(
            self,
            Action::Refresh | Action::SubmitAdd | Action::SaveEdit | Action::DeleteSelected
        )
    }
}

pub struct App {
    /// Local view of the employee list
    pub employees: Vec<Employee>,
    /// Row cursor
    pub selected: usize,
    /// A request is in flight
    pub loading: bool,
    /// Dismissible error banner
    pub error: Option<String>,
    pub mode: Mode,
    /// Shown in the header
    pub base_url: String,
}

impl App {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            employees: Vec::new(),
            selected: 0,
            loading: true,
            error: None,
            mode: Mode::Browse,
            base_url: base_url.into(),
        }
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.get(self.selected)
    }

    /// Id of the row under edit, if any
    pub fn editing_id(&self) -> Option<i64> {
        match &self.mode {
            Mode::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.employees.len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match &mut self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Adding(form) => match key.code {
                KeyCode::Esc => {
                    self.mode = Mode::Browse;
                    Action::None
                }
                KeyCode::Enter => Action::SubmitAdd,
                _ => {
                    edit_form(form, key);
                    Action::None
                }
            },
            Mode::Editing { form, .. } => match key.code {
                KeyCode::Esc => {
                    self.mode = Mode::Browse;
                    Action::None
                }
                KeyCode::Enter => Action::SaveEdit,
                _ => {
                    edit_form(form, key);
                    Action::None
                }
            },
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('x') => {
                self.error = None;
                Action::None
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Adding(EmployeeForm::default());
                Action::None
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(employee) = self.selected_employee() {
                    self.mode = Mode::Editing {
                        id: employee.id,
                        form: EmployeeForm::from_employee(employee),
                    };
                }
                Action::None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.selected_employee().is_some() {
                    Action::DeleteSelected
                } else {
                    Action::None
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = self.employees.len().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Run an action against the API
    pub async fn perform<B: EmployeeBackend + ?Sized>(&mut self, action: Action, backend: &B) {
        match action {
            Action::Refresh => self.refresh(backend).await,
            Action::SubmitAdd => self.submit_add(backend).await,
            Action::SaveEdit => self.save_edit(backend).await,
            Action::DeleteSelected => self.delete_selected(backend).await,
            Action::None | Action::Quit => {}
        }
        self.loading = false;
    }

    /// Replace the cache with the server's list
    pub async fn refresh<B: EmployeeBackend + ?Sized>(&mut self, backend: &B) {
        self.loading = true;
        match backend.list().await {
            Ok(employees) => {
                tracing::info!(count = employees.len(), "Employees loaded");
                self.employees = employees;
                self.clamp_selection();
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch employees");
                self.error = Some(format!("Failed to fetch employees: {e}"));
            }
        }
        self.loading = false;
    }

    async fn submit_add<B: EmployeeBackend + ?Sized>(&mut self, backend: &B) {
        let Mode::Adding(form) = &self.mode else {
            return;
        };
        let payload = match form.to_create() {
            Ok(payload) => payload,
            Err(message) => {
                self.error = Some(message);
                return;
            }
        };

        match backend.create(payload).await {
            Ok(employee) => {
                tracing::info!(id = employee.id, "Employee added");
                self.employees.push(employee);
                self.selected = self.employees.len() - 1;
                self.mode = Mode::Browse;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to add employee");
                self.error = Some(format!("Failed to add employee: {e}"));
            }
        }
    }

    async fn save_edit<B: EmployeeBackend + ?Sized>(&mut self, backend: &B) {
        let Mode::Editing { id, form } = &self.mode else {
            return;
        };
        let id = *id;
        let update = match form.to_update() {
            Ok(update) => update,
            Err(message) => {
                self.error = Some(message);
                return;
            }
        };

        match backend.update(id, update).await {
            Ok(updated) => {
                tracing::info!(id, "Employee updated");
                if let Some(row) = self.employees.iter_mut().find(|e| e.id == id) {
                    *row = updated;
                }
                self.mode = Mode::Browse;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Failed to update employee");
                self.error = Some(format!("Failed to update employee: {e}"));
            }
        }
    }

    async fn delete_selected<B: EmployeeBackend + ?Sized>(&mut self, backend: &B) {
        let Some(id) = self.selected_employee().map(|e| e.id) else {
            return;
        };

        match backend.delete(id).await {
            Ok(_) => {
                tracing::info!(id, "Employee deleted");
                self.employees.retain(|e| e.id != id);
                self.clamp_selection();
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Failed to delete employee");
                self.error = Some(format!("Failed to delete employee: {e}"));
            }
        }
    }
}

fn edit_form(form: &mut EmployeeForm, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        _ => form.handle_event(&Event::Key(key)),
    }
}
