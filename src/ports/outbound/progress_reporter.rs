/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts user feedback on stderr. The busy indicator is
/// purely cosmetic: starting or finishing it has no effect on ordering
/// or correctness of the comparison itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts the busy indicator shown while the heavy part of a run
    /// (parse, extract, compare) executes
    fn start_busy(&self, message: &str);

    /// Stops the busy indicator and reports a completion message
    fn finish_busy(&self, message: &str);

    /// Stops the busy indicator, if any, and reports an error message
    fn report_error(&self, message: &str);
}
