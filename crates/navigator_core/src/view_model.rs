use crate::NavEntry;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavViewModel {
    pub displayed: Option<NavEntry>,
    pub in_flight: usize,
    pub loading: bool,
    pub dirty: bool,
}
