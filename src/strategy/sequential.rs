use crate::*;

/// Weighs the first item against every other item in turn.
///
/// Correct for any universe of three or more items but far from optimal:
/// with twelve items it may take ten weighings. Useful as a baseline
/// candidate for the harness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Strategy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }
    fn run(&mut self, items: &[Item], balance: &mut Balance<'_>) -> Result<(), ContractError> {
        if items.len() < 3 {
            return Err(ContractError::InvalidSetup(format!(
                "sequential search needs at least 3 items, got {}",
                items.len()
            )));
        }
        let anchor = &items[0];
        let last = items.len() - 1;
        for (i, other) in items.iter().enumerate().take(last).skip(1) {
            let pans = Weighing::new(vec![anchor.clone()], vec![other.clone()]);
            match balance.weigh(pans)? {
                Outcome::Balanced => continue,
                _ if i > 1 => return balance.submit(other.clone()),
                _ => {
                    // anchor and other disagree; a third item is genuine
                    let pans = Weighing::new(vec![anchor.clone()], vec![items[2].clone()]);
                    return match balance.weigh(pans)? {
                        Outcome::Balanced => balance.submit(other.clone()),
                        _ => balance.submit(anchor.clone()),
                    };
                }
            }
        }
        balance.submit(items[last].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn finds_every_outlier() {
        for outlier in Item::universe() {
            for weight in Weight::ALL {
                let mut contract = Contract::default();
                let truth = Truth::new(outlier.clone(), weight);
                contract
                    .initialize(&Item::universe(), truth, Verbosity::Silent)
                    .unwrap();
                contract.play(&mut Sequential).unwrap();
                assert_eq!(contract.status(), Status::Complete);
                assert_eq!(contract.answer(), Some(&outlier));
            }
        }
    }
    #[test]
    fn last_item_costs_ten_weighings() {
        let mut contract = Contract::default();
        let truth = Truth::new(Item::from("12"), Weight::Light);
        contract
            .initialize(&Item::universe(), truth, Verbosity::Silent)
            .unwrap();
        contract.play(&mut Sequential).unwrap();
        assert_eq!(contract.uses(), BALLS - 2);
    }
    #[test]
    fn first_item_costs_two_weighings() {
        let mut contract = Contract::default();
        let truth = Truth::new(Item::from("1"), Weight::Heavy);
        contract
            .initialize(&Item::universe(), truth, Verbosity::Silent)
            .unwrap();
        contract.play(&mut Sequential).unwrap();
        assert_eq!(contract.uses(), 2);
        assert_eq!(contract.answer(), Some(&Item::from("1")));
    }
    #[test]
    fn tiny_universes_are_rejected() {
        let mut contract = Contract::default().expecting(2);
        let items = vec![Item::from("a"), Item::from("b")];
        let truth = Truth::new(Item::from("a"), Weight::Heavy);
        contract
            .initialize(&items, truth, Verbosity::Silent)
            .unwrap();
        let result = contract.play(&mut Sequential);
        assert!(matches!(result, Err(ContractError::InvalidSetup(_))));
        assert_eq!(contract.status(), Status::Running);
    }
}
