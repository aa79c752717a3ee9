// roster-console/tests/console_state.rs
// 界面状态测试: 使用内存中的假后端, 不需要网络

use std::sync::Mutex;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_client::{ClientError, ClientResult};
use roster_console::{Action, App, EmployeeBackend, Mode};
use shared::{DeleteResponse, Employee, EmployeeCreate, EmployeeUpdate};

/// In-memory backend with switchable failures
#[derive(Default)]
struct FakeBackend {
    employees: Mutex<Vec<Employee>>,
    next_id: Mutex<i64>,
    fail: Mutex<Option<String>>,
    calls: Mutex<usize>,
}

impl FakeBackend {
    fn with(employees: Vec<Employee>) -> Self {
        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            employees: Mutex::new(employees),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    fn fail_with(&self, message: &str) {
        *self.fail.lock().unwrap() = Some(message.to_string());
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn check(&self) -> ClientResult<()> {
        *self.calls.lock().unwrap() += 1;
        match self.fail.lock().unwrap().clone() {
            Some(message) => Err(ClientError::Rejected(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmployeeBackend for FakeBackend {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.check()?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn create(&self, payload: EmployeeCreate) -> ClientResult<Employee> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let employee = Employee {
            id: *next_id,
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            position: payload.position.unwrap_or_default(),
            salary: payload.salary,
        };
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, update: EmployeeUpdate) -> ClientResult<Employee> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        let row = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound("Employee not found".into()))?;
        *row = row.patched(update);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResponse> {
        self.check()?;
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(ClientError::NotFound("Employee not found".into()));
        }
        Ok(DeleteResponse::deleted(id))
    }
}

fn employee(id: i64, name: &str, salary: Option<i64>) -> Employee {
    Employee {
        id,
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        position: "Engineer".into(),
        salary,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Press a key and run whatever it asks for
async fn press(app: &mut App, backend: &FakeBackend, code: KeyCode) -> Action {
    let action = app.handle_key(key(code));
    app.perform(action, backend).await;
    action
}

#[tokio::test]
async fn test_refresh_replaces_cache() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", Some(90000))]);
    let mut app = App::new("http://test");
    assert!(app.loading);

    app.refresh(&backend).await;
    assert!(!app.loading);
    assert_eq!(app.employees.len(), 1);

    backend.employees.lock().unwrap().push(employee(2, "Bo", None));
    assert_eq!(press(&mut app, &backend, KeyCode::Char('r')).await, Action::Refresh);
    assert_eq!(app.employees.len(), 2);
}

#[tokio::test]
async fn test_add_appends_after_confirmation() {
    let backend = FakeBackend::default();
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    app.handle_key(key(KeyCode::Char('a')));
    assert!(matches!(app.mode, Mode::Adding(_)));
    type_text(&mut app, "Ana");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "ana@x.com");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Engineer");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "90000");

    assert_eq!(press(&mut app, &backend, KeyCode::Enter).await, Action::SubmitAdd);
    assert!(matches!(app.mode, Mode::Browse));
    assert_eq!(app.employees.len(), 1);
    assert_eq!(app.employees[0].salary, Some(90000));
    assert_eq!(app.error, None);
}

#[tokio::test]
async fn test_add_missing_fields_sends_nothing() {
    let backend = FakeBackend::default();
    let mut app = App::new("http://test");
    app.refresh(&backend).await;
    let calls = backend.calls();

    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "Ana");
    press(&mut app, &backend, KeyCode::Enter).await;

    assert_eq!(backend.calls(), calls);
    assert_eq!(app.error.as_deref(), Some("Name, email, and position are required"));
    assert!(matches!(app.mode, Mode::Adding(_)));
    assert!(app.employees.is_empty());
}

#[tokio::test]
async fn test_bad_salary_sends_nothing() {
    let backend = FakeBackend::default();
    let mut app = App::new("http://test");
    app.refresh(&backend).await;
    let calls = backend.calls();

    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "Ana");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "ana@x.com");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Engineer");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "lots");
    press(&mut app, &backend, KeyCode::Enter).await;

    assert_eq!(backend.calls(), calls);
    assert!(app.error.is_some());
}

#[tokio::test]
async fn test_failed_add_keeps_cache_and_shows_banner() {
    let backend = FakeBackend::default();
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    backend.fail_with("Email 'ana@x.com' already exists");
    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "Ana");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "ana@x.com");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Engineer");
    press(&mut app, &backend, KeyCode::Enter).await;

    assert!(app.employees.is_empty());
    let banner = app.error.clone().unwrap();
    assert!(banner.contains("already exists"));

    // Banner is dismissible once back in the table
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.error, None);
}

#[tokio::test]
async fn test_edit_replaces_row_and_clears_salary() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", Some(90000)), employee(2, "Bo", None)]);
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    app.handle_key(key(KeyCode::Char('e')));
    assert_eq!(app.editing_id(), Some(1));

    // Jump to salary and erase it
    app.handle_key(key(KeyCode::BackTab));
    for _ in 0..5 {
        app.handle_key(key(KeyCode::Backspace));
    }
    press(&mut app, &backend, KeyCode::Enter).await;

    assert_eq!(app.editing_id(), None);
    assert_eq!(app.employees[0].salary, None);
    assert_eq!(app.employees[0].name, "Ana");
    assert_eq!(app.employees[1], employee(2, "Bo", None));
}

#[tokio::test]
async fn test_cancel_edit_discards_buffer() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", Some(90000))]);
    let mut app = App::new("http://test");
    app.refresh(&backend).await;
    let calls = backend.calls();

    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "zzz");
    app.handle_key(key(KeyCode::Esc));

    assert!(matches!(app.mode, Mode::Browse));
    assert_eq!(app.employees[0].name, "Ana");
    assert_eq!(backend.calls(), calls);
}

#[tokio::test]
async fn test_failed_edit_keeps_row() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", Some(90000))]);
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    app.handle_key(key(KeyCode::Char('e')));
    type_text(&mut app, "!");
    backend.fail_with("name is too long");
    press(&mut app, &backend, KeyCode::Enter).await;

    assert_eq!(app.employees[0].name, "Ana");
    assert_eq!(app.editing_id(), Some(1));
    assert!(app.error.as_deref().unwrap().contains("name is too long"));
}

#[tokio::test]
async fn test_delete_removes_selected_row() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", None), employee(2, "Bo", None)]);
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    app.handle_key(key(KeyCode::Down));
    assert_eq!(press(&mut app, &backend, KeyCode::Char('d')).await, Action::DeleteSelected);

    assert_eq!(app.employees.len(), 1);
    assert_eq!(app.employees[0].id, 1);
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn test_failed_delete_keeps_row() {
    let backend = FakeBackend::with(vec![employee(1, "Ana", None)]);
    let mut app = App::new("http://test");
    app.refresh(&backend).await;

    backend.fail_with("database is locked");
    press(&mut app, &backend, KeyCode::Char('d')).await;

    assert_eq!(app.employees.len(), 1);
    assert!(app.error.is_some());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = App::new("http://test");
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);

    // Inside a form, q is just text
    app.handle_key(key(KeyCode::Char('a')));
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::None);
}
