// Account lookups through the name service switch

use super::command;

/// Real user id of the current process
#[cfg(unix)]
pub fn current_uid() -> Option<u32> {
    Some(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
pub fn current_uid() -> Option<u32> {
    None
}

/// Fields of the `passwd` record for `uid`, as reported by `getent`
pub fn passwd_entry(uid: u32) -> Option<Vec<String>> {
    let output = command::check_output("getent", &["passwd", &uid.to_string()])?;
    let record = output.trim_end();

    if record.is_empty() {
        return None;
    }

    Some(record.split(':').map(str::to_string).collect())
}

/// Login shell of the current user, read from the passwd database
pub fn login_shell() -> Option<String> {
    let fields = passwd_entry(current_uid()?)?;
    fields.last().filter(|shell| !shell.is_empty()).cloned()
}

/// Login name of the current user, read from the passwd database
pub fn login_name() -> Option<String> {
    let fields = passwd_entry(current_uid()?)?;
    fields.first().filter(|name| !name.is_empty()).cloned()
}
