/// A task scheduled on some clock.
pub trait TaskHandle {
    /// Drop the task before it fires.
    fn cancel(self);
    /// Let the task run to completion with nothing left to cancel it.
    fn detach(self);
}

pub trait Scheduler {
    type Task: TaskHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Task;
}
