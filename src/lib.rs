pub mod fuzzyset {
    pub mod domain;
    pub mod fuzzyset;
    pub mod fuzzysetmanager;
}

pub mod math {
    pub mod membership {
        pub mod formula;
        pub mod membershiperror;
        pub mod membershipfunction;
    }
    pub mod linspace;
    pub mod point;
}
