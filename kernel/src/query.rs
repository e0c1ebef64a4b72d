mod book;

pub use self::book::*;

use error_stack::Report;

use crate::KernelError;

/// Collapses a result set that is expected to hold at most one row.
///
/// More than one row means the store broke a uniqueness guarantee, which is
/// reported as [`KernelError::Ambiguous`] instead of silently picking a row.
pub fn single_or_none<T>(rows: Vec<T>) -> error_stack::Result<Option<T>, KernelError> {
    if rows.len() > 1 {
        return Err(Report::new(KernelError::Ambiguous)
            .attach_printable(format!("expected at most one row, found {}", rows.len())));
    }
    Ok(rows.into_iter().next())
}

#[cfg(test)]
mod test {
    use crate::query::single_or_none;
    use crate::KernelError;

    #[test]
    fn empty_is_none() {
        assert_eq!(single_or_none::<i32>(vec![]).unwrap(), None);
    }

    #[test]
    fn single_row_is_returned() {
        assert_eq!(single_or_none(vec![42]).unwrap(), Some(42));
    }

    #[test]
    fn duplicates_are_ambiguous() {
        let report = single_or_none(vec![1, 1]).unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Ambiguous));
    }
}
