use super::*;

use crate::natural::ascending;

#[test]
fn test_inf() {
    assert_eq!(Limit::<i64>::inf(1).unwrap(), Limit::PosInf);
    assert_eq!(Limit::<i64>::inf(100).unwrap(), Limit::PosInf);
    assert_eq!(Limit::<i64>::inf(-1).unwrap(), Limit::NegInf);
    match Limit::<i64>::inf(0) {
        Err(Error::InvalidArgument(_, _)) => (),
        Err(err) => panic!("unexpected error {}", err),
        Ok(limit) => panic!("unexpected limit {:?}", limit),
    }
}

#[test]
fn test_less_limit() {
    let less = ascending::<i64>;
    let (ninf, pinf) = (Limit::NegInf, Limit::PosInf);

    for item in [i64::MIN, -1, 0, 1, i64::MAX].iter() {
        let item = Limit::Item(item);
        assert!(less_limit(&less, ninf, item));
        assert!(!less_limit(&less, item, ninf));
        assert!(less_limit(&less, item, pinf));
        assert!(!less_limit(&less, pinf, item));
    }

    assert!(less_limit(&less, ninf, pinf));
    assert!(!less_limit(&less, pinf, ninf));
    assert!(!less_limit(&less, pinf, pinf));
    assert!(!less_limit(&less, ninf, ninf));

    assert!(less_limit(&less, Limit::Item(&1), Limit::Item(&2)));
    assert!(!less_limit(&less, Limit::Item(&2), Limit::Item(&2)));
}

#[test]
fn test_as_ref() {
    let limit = Limit::Item("hello".to_string());
    assert!(!limit.is_inf());
    assert_eq!(limit.as_ref(), Limit::Item(&"hello".to_string()));
    assert!(Limit::<String>::PosInf.as_ref().is_inf());
}
