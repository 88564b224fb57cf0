/// Strip a leading `+` from a repetition, allowing `$(+ $x)*`-style folds
macro_rules! strip_plus {
    {+ $($expr:tt)*} => {
        $($expr)*
    };
}
pub(crate) use strip_plus;
