#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum Sidedness {
    OneSided,
    #[default]
    TwoSided,
}

impl Sidedness {
    pub fn from_one_sided(one_sided: bool) -> Self {
        if one_sided {
            Sidedness::OneSided
        } else {
            Sidedness::TwoSided
        }
    }
}
