//! Employee Repository

use super::{RepoError, RepoResult};
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, is_blank, validate_required_text};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::{MSG_EMPLOYEE_NOT_FOUND, MSG_REQUIRED_FIELDS};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT id, name, email, position, salary FROM employees";

fn email_taken(email: &str) -> RepoError {
    RepoError::Duplicate(format!("Email '{email}' already exists"))
}

fn not_found() -> RepoError {
    RepoError::NotFound(MSG_EMPLOYEE_NOT_FOUND.to_string())
}

/// A unique violation on insert/update can only come from the email column
fn map_write_error(err: sqlx::Error, email: &str) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => email_taken(email),
        other => other,
    }
}

fn validate_fields(name: &str, email: &str, position: &str) -> RepoResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(position, "position", MAX_NAME_LEN)?;
    Ok(())
}

/// All employees in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Exact (case-sensitive) email lookup
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create a new employee; the id is assigned by SQLite
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let (Some(name), Some(email), Some(position)) = (data.name, data.email, data.position) else {
        return Err(RepoError::Validation(MSG_REQUIRED_FIELDS.to_string()));
    };
    if is_blank(Some(name.as_str()))
        || is_blank(Some(email.as_str()))
        || is_blank(Some(position.as_str()))
    {
        return Err(RepoError::Validation(MSG_REQUIRED_FIELDS.to_string()));
    }
    validate_fields(&name, &email, &position)?;

    // Check duplicate email
    if find_by_email(pool, &email).await?.is_some() {
        return Err(email_taken(&email));
    }

    let result = sqlx::query(
        "INSERT INTO employees (name, email, position, salary) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&name)
    .bind(&email)
    .bind(&position)
    .bind(data.salary)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, &email))?;

    let id = result.last_insert_rowid();
    tracing::debug!(id, "Employee created");

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Merge the provided fields onto an existing employee
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let existing = find_by_id(pool, id).await?.ok_or_else(not_found)?;

    if data.is_empty() {
        return Ok(existing);
    }

    let email_changed = data.email.as_ref().into_option().is_some_and(|e| *e != existing.email);
    let merged = existing.patched(data);
    validate_fields(&merged.name, &merged.email, &merged.position)?;

    // Check duplicate email if changing
    if email_changed && find_by_email(pool, &merged.email).await?.is_some() {
        return Err(email_taken(&merged.email));
    }

    let rows = sqlx::query(
        "UPDATE employees SET name = ?1, email = ?2, position = ?3, salary = ?4 WHERE id = ?5",
    )
    .bind(&merged.name)
    .bind(&merged.email)
    .bind(&merged.position)
    .bind(merged.salary)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| map_write_error(e, &merged.email))?;

    // Deleted between the read and the write
    if rows.rows_affected() == 0 {
        return Err(not_found());
    }

    tracing::debug!(id, "Employee updated");
    Ok(merged)
}

/// Hard delete an employee
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(not_found());
    }
    tracing::debug!(id, "Employee deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::Patch;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn ana() -> EmployeeCreate {
        EmployeeCreate::new("Ana", "ana@x.com", "Engineer", None)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_is_readable() {
        let pool = test_pool().await;
        let created = create(&pool, ana()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.salary, None);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found, created);

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn test_create_keeps_zero_salary_distinct_from_none() {
        let pool = test_pool().await;
        let zero = create(&pool, EmployeeCreate::new("Zed", "zed@x.com", "Intern", Some(0)))
            .await
            .unwrap();
        assert_eq!(zero.salary, Some(0));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_blank_fields() {
        let pool = test_pool().await;

        let missing = EmployeeCreate {
            email: None,
            ..ana()
        };
        assert!(matches!(
            create(&pool, missing).await,
            Err(RepoError::Validation(msg)) if msg == MSG_REQUIRED_FIELDS
        ));

        let blank = EmployeeCreate {
            position: Some("  ".into()),
            ..ana()
        };
        assert!(matches!(create(&pool, blank).await, Err(RepoError::Validation(_))));

        assert!(find_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_leaves_store_unchanged() {
        let pool = test_pool().await;
        create(&pool, ana()).await.unwrap();

        let dup = EmployeeCreate::new("Other", "ana@x.com", "Manager", Some(1));
        let err = create(&pool, dup).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(ref msg) if msg == "Email 'ana@x.com' already exists"));
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let pool = test_pool().await;
        create(&pool, ana()).await.unwrap();
        let upper = EmployeeCreate::new("Ana", "ANA@x.com", "Engineer", None);
        assert!(create(&pool, upper).await.is_ok());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let pool = test_pool().await;
        let first = create(&pool, ana()).await.unwrap();
        delete(&pool, first.id).await.unwrap();

        let second = create(&pool, ana()).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_salary_only_keeps_other_fields() {
        let pool = test_pool().await;
        let created = create(&pool, ana()).await.unwrap();

        let update_data = EmployeeUpdate {
            salary: Patch::Set(Some(50000)),
            ..Default::default()
        };
        let updated = update(&pool, created.id, update_data).await.unwrap();
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "ana@x.com");
        assert_eq!(updated.position, "Engineer");
        assert_eq!(updated.salary, Some(50000));

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn test_update_can_clear_salary() {
        let pool = test_pool().await;
        let created = create(&pool, EmployeeCreate::new("Ana", "ana@x.com", "Engineer", Some(90000)))
            .await
            .unwrap();

        let keep = EmployeeUpdate {
            position: Patch::Set("Lead".into()),
            ..Default::default()
        };
        let kept = update(&pool, created.id, keep).await.unwrap();
        assert_eq!(kept.salary, Some(90000));

        let clear = EmployeeUpdate {
            salary: Patch::Set(None),
            ..Default::default()
        };
        let cleared = update(&pool, created.id, clear).await.unwrap();
        assert_eq!(cleared.salary, None);
        assert_eq!(cleared.position, "Lead");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_fails_without_change() {
        let pool = test_pool().await;
        create(&pool, ana()).await.unwrap();
        let bea = create(&pool, EmployeeCreate::new("Bea", "bea@x.com", "Designer", None))
            .await
            .unwrap();

        let steal = EmployeeUpdate {
            email: Patch::Set("ana@x.com".into()),
            name: Patch::Set("Beatriz".into()),
            ..Default::default()
        };
        assert!(matches!(
            update(&pool, bea.id, steal).await,
            Err(RepoError::Duplicate(_))
        ));
        assert_eq!(find_by_id(&pool, bea.id).await.unwrap().unwrap(), bea);
    }

    #[tokio::test]
    async fn test_update_with_own_email_is_allowed() {
        let pool = test_pool().await;
        let created = create(&pool, ana()).await.unwrap();
        let same = EmployeeUpdate {
            email: Patch::Set("ana@x.com".into()),
            ..Default::default()
        };
        assert!(update(&pool, created.id, same).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_blank_required_field() {
        let pool = test_pool().await;
        let created = create(&pool, ana()).await.unwrap();
        let blank = EmployeeUpdate {
            name: Patch::Set(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            update(&pool, created.id, blank).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let data = EmployeeUpdate {
            salary: Patch::Set(Some(1)),
            ..Default::default()
        };
        assert!(matches!(update(&pool, 42, data).await, Err(RepoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let pool = test_pool().await;
        let created = create(&pool, ana()).await.unwrap();
        delete(&pool, created.id).await.unwrap();
        assert!(matches!(delete(&pool, created.id).await, Err(RepoError::NotFound(_))));
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_in_insertion_order() {
        let pool = test_pool().await;
        for (name, email) in [("Cy", "cy@x.com"), ("Ana", "ana@x.com"), ("Bea", "bea@x.com")] {
            create(&pool, EmployeeCreate::new(name, email, "Staff", None))
                .await
                .unwrap();
        }
        let names: Vec<_> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Cy", "Ana", "Bea"]);
    }
}
