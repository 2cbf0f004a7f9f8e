use super::*;
use crate::*;
use std::collections::HashSet;

/// State machine for one run at a time.
///
/// ```text
/// NotInitialized --initialize--> Running --submit--> Complete
///                                   ^                    |
///                                   +----initialize------+
/// ```
///
/// The contract holds the hidden [`Truth`], validates every weighing before
/// asking the [`Scale`], and keeps an append-only history for auditing.
/// Re-initializing starts a logically fresh run; nothing carries over.
pub struct Contract {
    expected: usize,
    items: Vec<Item>,
    truth: Option<Truth>,
    status: Status,
    history: Vec<Record>,
    answer: Option<Item>,
    verbosity: Verbosity,
    observer: Box<dyn Observer>,
}

impl Default for Contract {
    fn default() -> Self {
        Self::observed(Box::new(Silent))
    }
}

impl Contract {
    /// A contract reporting to the given observer when runs are verbose.
    pub fn observed(observer: Box<dyn Observer>) -> Self {
        Self {
            expected: BALLS,
            items: Vec::new(),
            truth: None,
            status: Status::NotInitialized,
            history: Vec::new(),
            answer: None,
            verbosity: Verbosity::Silent,
            observer,
        }
    }
    /// Accept universes of `n` items instead of the standard twelve.
    pub fn expecting(mut self, n: usize) -> Self {
        self.expected = n;
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    /// Number of weighings made so far in this run.
    pub fn uses(&self) -> Uses {
        self.history.len()
    }
    /// The submitted candidate, once the run is complete.
    pub fn answer(&self) -> Option<&Item> {
        self.answer.as_ref()
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Start a run over `items` with the hidden `truth`.
    pub fn initialize(
        &mut self,
        items: &[Item],
        truth: Truth,
        verbosity: Verbosity,
    ) -> Result<(), ContractError> {
        self.status = Status::NotInitialized;
        self.truth = None;
        if items.len() != self.expected {
            return Err(ContractError::InvalidSetup(format!(
                "expected {} items, got {}",
                self.expected,
                items.len()
            )));
        }
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dupe) = items.iter().find(|item| !seen.insert(*item)) {
            return Err(ContractError::InvalidSetup(format!(
                "item {} appears more than once",
                dupe
            )));
        }
        if !items.contains(truth.outlier()) {
            return Err(ContractError::InvalidSetup(format!(
                "outlier {} is not among the items",
                truth.outlier()
            )));
        }
        self.items = items.to_vec();
        self.truth = Some(truth);
        self.history.clear();
        self.answer = None;
        self.verbosity = verbosity;
        self.status = Status::Running;
        Ok(())
    }

    /// Use the balance once.
    pub fn weigh(&mut self, weighing: Weighing) -> Result<Outcome, ContractError> {
        let truth = self.running("weigh")?;
        if weighing.left().is_empty() || weighing.right().is_empty() {
            return Err(ContractError::InvalidComparison(format!(
                "both pans must hold at least one item: {}",
                weighing
            )));
        }
        if let Some(item) = weighing.overlap() {
            return Err(ContractError::InvalidComparison(format!(
                "item {} is on both pans",
                item
            )));
        }
        if let Some(item) = weighing.repeat() {
            return Err(ContractError::InvalidComparison(format!(
                "item {} is placed twice",
                item
            )));
        }
        if let Some(item) = weighing.items().find(|item| !self.items.contains(item)) {
            return Err(ContractError::InvalidComparison(format!(
                "item {} is not in the active universe",
                item
            )));
        }
        let outcome = Scale::resolve(&weighing, truth);
        let record = Record::new(weighing, outcome);
        if self.verbosity == Verbosity::Logging {
            self.observer.weighed(&record);
        }
        self.history.push(record);
        Ok(outcome)
    }

    /// Close the run with a final answer. The answer is not judged here.
    pub fn submit(&mut self, candidate: Item) -> Result<(), ContractError> {
        self.running("submit")?;
        if self.verbosity == Verbosity::Logging {
            self.observer.submitted(&candidate);
        }
        self.answer = Some(candidate);
        self.status = Status::Complete;
        Ok(())
    }

    /// Hand the active universe to `strategy` along with a balance handle.
    pub fn play<S>(&mut self, strategy: &mut S) -> Result<(), ContractError>
    where
        S: Strategy + ?Sized,
    {
        self.running("play")?;
        let items = self.items.clone();
        strategy.run(&items, &mut self.balance())
    }

    /// Capability handle exposing only weighing and submission.
    pub fn balance(&mut self) -> Balance<'_> {
        Balance::from(self)
    }

    fn running(&self, action: &'static str) -> Result<&Truth, ContractError> {
        match (self.status, self.truth.as_ref()) {
            (Status::Running, Some(truth)) => Ok(truth),
            (status, _) => Err(ContractError::OutOfSequence { action, status }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn items(labels: &[&str]) -> Vec<Item> {
        labels.iter().copied().map(Item::from).collect()
    }
    fn running(label: &str, weight: Weight) -> Contract {
        let mut contract = Contract::default();
        let truth = Truth::new(Item::from(label), weight);
        contract
            .initialize(&Item::universe(), truth, Verbosity::Silent)
            .unwrap();
        contract
    }

    #[test]
    fn starts_uninitialized() {
        let contract = Contract::default();
        assert_eq!(contract.status(), Status::NotInitialized);
        assert_eq!(contract.uses(), 0);
        assert!(contract.answer().is_none());
    }

    #[test]
    fn initialize_rejects_wrong_count() {
        let mut contract = Contract::default();
        let truth = Truth::new(Item::from("1"), Weight::Heavy);
        let result = contract.initialize(&items(&["1", "2", "3"]), truth, Verbosity::Silent);
        assert!(matches!(result, Err(ContractError::InvalidSetup(_))));
        assert_eq!(contract.status(), Status::NotInitialized);
    }

    #[test]
    fn initialize_rejects_duplicates() {
        let mut contract = Contract::default();
        let mut universe = Item::universe();
        universe[11] = Item::from("1");
        let truth = Truth::new(Item::from("2"), Weight::Light);
        let result = contract.initialize(&universe, truth, Verbosity::Silent);
        assert!(matches!(result, Err(ContractError::InvalidSetup(_))));
    }

    #[test]
    fn initialize_rejects_foreign_outlier() {
        let mut contract = Contract::default();
        let truth = Truth::new(Item::from("13"), Weight::Heavy);
        let result = contract.initialize(&Item::universe(), truth, Verbosity::Silent);
        assert!(matches!(result, Err(ContractError::InvalidSetup(_))));
    }

    #[test]
    fn weigh_records_history() {
        let mut contract = running("3", Weight::Heavy);
        let weighing = Weighing::new(items(&["1", "2", "3"]), items(&["4", "5", "6"]));
        let outcome = contract.weigh(weighing.clone()).unwrap();
        assert_eq!(outcome, Outcome::TipLeft);
        assert_eq!(contract.uses(), 1);
        assert_eq!(contract.history()[0], Record::new(weighing, Outcome::TipLeft));
    }

    #[test]
    fn weigh_rejects_shared_items() {
        let mut contract = running("3", Weight::Heavy);
        let weighing = Weighing::new(items(&["1", "2"]), items(&["2", "4"]));
        let result = contract.weigh(weighing);
        assert!(matches!(result, Err(ContractError::InvalidComparison(_))));
        assert_eq!(contract.uses(), 0);
    }

    #[test]
    fn weigh_rejects_repeated_items() {
        let mut contract = running("3", Weight::Heavy);
        let weighing = Weighing::new(items(&["1", "1"]), items(&["2", "3"]));
        let result = contract.weigh(weighing);
        assert!(matches!(result, Err(ContractError::InvalidComparison(_))));
        assert_eq!(contract.uses(), 0);
    }

    #[test]
    fn weigh_rejects_foreign_items() {
        let mut contract = running("3", Weight::Heavy);
        for weighing in [
            Weighing::new(items(&["1", "99"]), items(&["2", "4"])),
            Weighing::new(items(&["1", "2"]), items(&["x", "4"])),
        ] {
            let result = contract.weigh(weighing);
            assert!(matches!(result, Err(ContractError::InvalidComparison(_))));
        }
    }

    #[test]
    fn weigh_rejects_empty_pan() {
        let mut contract = running("3", Weight::Heavy);
        let result = contract.weigh(Weighing::new(vec![], items(&["1"])));
        assert!(matches!(result, Err(ContractError::InvalidComparison(_))));
    }

    #[test]
    fn unequal_counts_tip_toward_larger_pan() {
        let mut contract = running("1", Weight::Light);
        let weighing = Weighing::new(items(&["1"]), items(&["2", "3"]));
        assert_eq!(contract.weigh(weighing).unwrap(), Outcome::TipRight);
    }

    #[test]
    fn submit_completes_without_judging() {
        let mut contract = running("3", Weight::Heavy);
        contract.submit(Item::from("7")).unwrap();
        assert_eq!(contract.status(), Status::Complete);
        assert_eq!(contract.answer(), Some(&Item::from("7")));
    }

    #[test]
    fn out_of_sequence_everywhere_but_running() {
        let weighing = || Weighing::new(items(&["1"]), items(&["2"]));
        let mut fresh = Contract::default();
        let mut complete = running("3", Weight::Heavy);
        complete.submit(Item::from("3")).unwrap();
        for contract in [&mut fresh, &mut complete] {
            let status = contract.status();
            assert_eq!(
                contract.weigh(weighing()),
                Err(ContractError::OutOfSequence { action: "weigh", status })
            );
            assert_eq!(
                contract.submit(Item::from("3")),
                Err(ContractError::OutOfSequence { action: "submit", status })
            );
            assert_eq!(contract.status(), status);
        }
    }

    #[test]
    fn initialize_resets_previous_run() {
        let mut contract = running("3", Weight::Heavy);
        contract
            .weigh(Weighing::new(items(&["1"]), items(&["2"])))
            .unwrap();
        contract.submit(Item::from("3")).unwrap();
        let truth = Truth::new(Item::from("5"), Weight::Light);
        contract
            .initialize(&Item::universe(), truth, Verbosity::Silent)
            .unwrap();
        assert_eq!(contract.status(), Status::Running);
        assert_eq!(contract.uses(), 0);
        assert!(contract.answer().is_none());
    }

    #[test]
    fn failed_initialize_aborts_previous_run() {
        let mut contract = running("3", Weight::Heavy);
        let truth = Truth::new(Item::from("99"), Weight::Light);
        let result = contract.initialize(&Item::universe(), truth, Verbosity::Silent);
        assert!(matches!(result, Err(ContractError::InvalidSetup(_))));
        assert_eq!(contract.status(), Status::NotInitialized);
        assert!(matches!(
            contract.weigh(Weighing::new(items(&["1"]), items(&["2"]))),
            Err(ContractError::OutOfSequence { status: Status::NotInitialized, .. })
        ));
    }

    #[derive(Default, Clone)]
    struct Tape(Rc<RefCell<Vec<String>>>);
    impl Observer for Tape {
        fn weighed(&self, record: &Record) {
            self.0.borrow_mut().push(record.to_string());
        }
        fn submitted(&self, item: &Item) {
            self.0.borrow_mut().push(format!("submit {}", item));
        }
    }

    #[test]
    fn observer_sees_only_verbose_runs() {
        let tape = Tape::default();
        let mut contract = Contract::observed(Box::new(tape.clone()));
        let truth = Truth::new(Item::from("2"), Weight::Heavy);
        let weighing = || Weighing::new(items(&["1"]), items(&["2"]));
        contract
            .initialize(&Item::universe(), truth.clone(), Verbosity::Silent)
            .unwrap();
        contract.weigh(weighing()).unwrap();
        contract.submit(Item::from("2")).unwrap();
        assert!(tape.0.borrow().is_empty());
        contract
            .initialize(&Item::universe(), truth, Verbosity::Logging)
            .unwrap();
        contract.weigh(weighing()).unwrap();
        contract.submit(Item::from("2")).unwrap();
        assert_eq!(*tape.0.borrow(), vec!["[1] < [2]", "submit 2"]);
    }

    #[test]
    fn expecting_other_sizes() {
        let mut contract = Contract::default().expecting(3);
        let truth = Truth::new(Item::from("b"), Weight::Light);
        contract
            .initialize(&items(&["a", "b", "c"]), truth, Verbosity::Silent)
            .unwrap();
        assert_eq!(contract.status(), Status::Running);
    }
}
