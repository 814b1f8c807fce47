//! Role gating for mutating console actions.

use campus_core::error::{CampusError, Result};
use campus_core::session::SessionContext;
use campus_core::user::{Role, UserSummary};

/// Actions the console gates on the viewer's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create/edit/delete courses, assignments, enrollments; grade submissions.
    ManageCoursework,
    /// Edit or remove student accounts.
    ManageStudents,
    /// Edit teacher accounts.
    ManageTeachers,
}

impl Capability {
    pub fn allows(&self, role: Role) -> bool {
        match self {
            Capability::ManageCoursework => role.can_manage_coursework(),
            Capability::ManageStudents => role.can_manage_students(),
            Capability::ManageTeachers => role.can_manage_teachers(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Capability::ManageCoursework => "manage coursework",
            Capability::ManageStudents => "manage students",
            Capability::ManageTeachers => "manage teachers",
        }
    }
}

/// Returns the viewer when they hold `capability`.
///
/// # Errors
///
/// - `Authentication` when nobody is logged in
/// - `PermissionDenied` when the viewer's role lacks the capability
pub fn require(context: &SessionContext, capability: Capability) -> Result<UserSummary> {
    let user = context
        .current_user()
        .ok_or_else(|| CampusError::authentication("not logged in"))?;
    if capability.allows(user.role) {
        Ok(user)
    } else {
        Err(CampusError::permission_denied(format!(
            "{} '{}' cannot {}",
            user.role,
            user.email,
            capability.describe()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(role: Role) -> SessionContext {
        let context = SessionContext::new();
        context.attach_token("t");
        context
            .establish(UserSummary {
                id: "1".into(),
                name: "Viewer".into(),
                email: "viewer@example.com".into(),
                role,
            })
            .unwrap();
        context
    }

    #[test]
    fn test_requires_login() {
        let err = require(&SessionContext::new(), Capability::ManageCoursework).unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_teacher_manages_coursework() {
        let user = require(&context_with(Role::Teacher), Capability::ManageCoursework).unwrap();
        assert_eq!(user.role, Role::Teacher);
    }

    #[test]
    fn test_student_is_denied() {
        let err = require(&context_with(Role::Student), Capability::ManageStudents).unwrap_err();
        assert!(matches!(err, CampusError::PermissionDenied(_)));
    }

    #[test]
    fn test_only_admin_manages_teachers() {
        assert!(require(&context_with(Role::Admin), Capability::ManageTeachers).is_ok());
        assert!(require(&context_with(Role::Teacher), Capability::ManageTeachers).is_err());
    }
}
