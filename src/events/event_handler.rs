/// Implemented by every game engine, once per command type it accepts.
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}
