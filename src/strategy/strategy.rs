use crate::*;

/// Anything that can find the odd item with a balance.
///
/// `run` receives the universe in the order the contract was initialized
/// with and a [`Balance`] handle. Before returning `Ok` it must have
/// submitted exactly one answer. Items are opaque; a strategy may address
/// them by position in `items` but must not interpret their labels.
/// Only `run` is required; `name` defaults to the type name.
pub trait Strategy {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    fn run(&mut self, items: &[Item], balance: &mut Balance<'_>) -> Result<(), ContractError>;
}

impl<S> Strategy for Box<S>
where
    S: Strategy + ?Sized,
{
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }
    fn run(&mut self, items: &[Item], balance: &mut Balance<'_>) -> Result<(), ContractError> {
        self.as_mut().run(items, balance)
    }
}
