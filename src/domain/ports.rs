use crate::domain::model::Verdict;

pub trait PrimalityTest {
    fn classify(&self, n: i64) -> Verdict;

    fn is_prime(&self, n: i64) -> bool {
        self.classify(n).is_prime()
    }
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn verbose(&self) -> bool;
}
