// implemented when timers or subscriptions would otherwise outlive their owner
pub trait Destroyable {
    fn destroy(&mut self);
}
