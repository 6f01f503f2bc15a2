use polyvec::{Element, ElementKind, Error, Growth, Result, TaggedVec, Unbounded, VecOptions};

type V = TaggedVec<Unbounded>;

#[test]
fn test_integer_vec() -> Result<()> {
    let mut vec = V::new(ElementKind::Integer);

    assert_eq!(vec.kind(), ElementKind::Integer);
    assert!(vec.is_empty());

    for i in 0..10 {
        vec.append(i)?;
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(vec.as_integers(), Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][..]));
    assert!(vec.as_floats().is_none());

    Ok(())
}

#[test]
fn test_float_vec() -> Result<()> {
    let mut vec = V::new(ElementKind::FloatingPoint);

    for i in 0..10 {
        vec.append(f64::from(i) / 2.0)?;
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(
        vec.as_floats(),
        Some(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5][..])
    );
    assert!(vec.as_integers().is_none());

    Ok(())
}

#[test]
fn test_unset_kind_refuses_appends() {
    let mut vec = V::default();

    assert_eq!(vec.kind(), ElementKind::Unset);

    for _ in 0..3 {
        assert!(matches!(vec.append(1), Err(Error::UnspecifiedKind)));
        assert!(matches!(vec.append(1.5), Err(Error::UnspecifiedKind)));
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert_eq!(vec.iter().count(), 0);
    }
}

#[test]
fn test_kind_mismatch_leaves_vec_unchanged() -> Result<()> {
    let mut vec = V::new(ElementKind::Integer);
    vec.append(7)?;

    let err = vec.append(7.0).unwrap_err();
    assert!(matches!(
        err,
        Error::KindMismatch {
            expected: ElementKind::Integer,
            found: ElementKind::FloatingPoint,
        }
    ));
    assert!(!err.is_allocation());
    assert_eq!(
        err.to_string(),
        "Kind mismatch: expected integer, found floating point"
    );

    assert_eq!(vec.len(), 1);
    assert_eq!(vec.as_integers(), Some(&[7][..]));

    let mut vec = V::new(ElementKind::FloatingPoint);
    assert!(matches!(
        vec.append(Element::Integer(3)),
        Err(Error::KindMismatch { .. })
    ));
    assert!(vec.is_empty());

    Ok(())
}

#[test]
fn test_clear_keeps_kind() -> Result<()> {
    let mut vec = V::new(ElementKind::FloatingPoint);

    vec.append(1.0)?;
    vec.append(2.0)?;
    vec.clear();

    assert_eq!(vec.kind(), ElementKind::FloatingPoint);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);

    vec.clear();
    assert!(vec.is_empty());

    vec.append(3.0)?;
    assert_eq!(vec.as_floats(), Some(&[3.0][..]));

    let mut unset = V::default();
    unset.clear();
    assert_eq!(unset.kind(), ElementKind::Unset);

    Ok(())
}

#[test]
fn test_reinitialize() -> Result<()> {
    let mut vec = V::default();

    vec.reinitialize(ElementKind::Integer);
    vec.append(1)?;
    vec.append(2)?;
    assert_eq!(vec.kind(), ElementKind::Integer);

    vec.reinitialize(ElementKind::FloatingPoint);
    assert_eq!(vec.kind(), ElementKind::FloatingPoint);
    assert!(vec.is_empty());
    vec.append(0.25)?;
    assert_eq!(vec.as_floats(), Some(&[0.25][..]));

    vec.reinitialize(ElementKind::Unset);
    assert!(vec.is_empty());
    assert!(matches!(vec.append(0.5), Err(Error::UnspecifiedKind)));

    Ok(())
}

#[test]
fn test_iter_yields_elements_in_order() -> Result<()> {
    let mut vec = V::with_options(ElementKind::Integer, VecOptions::new(Growth::Doubling));

    for i in [5, -3, 12] {
        vec.append(i)?;
    }

    let iter = vec.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(
        iter.collect::<Vec<_>>(),
        vec![Element::Integer(5), Element::Integer(-3), Element::Integer(12)]
    );

    let kinds = (&vec).into_iter().map(|e| e.kind()).collect::<Vec<_>>();
    assert_eq!(kinds, vec![ElementKind::Integer; 3]);

    assert_eq!(vec.options().growth, Growth::Doubling);
    assert_eq!(vec.capacity(), 4);

    Ok(())
}

#[test]
fn test_element_display() {
    assert_eq!(Element::Integer(-42).to_string(), "-42");
    assert_eq!(Element::FloatingPoint(1.0).to_string(), "1");
    assert_eq!(Element::FloatingPoint(0.1).to_string(), "0.1");
    assert_eq!(Element::FloatingPoint(f64::NEG_INFINITY).to_string(), "-inf");
}
