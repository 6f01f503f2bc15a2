use polyvec::{ElementKind, PrintableVec, TaggedVec, Unbounded};

fn main() -> anyhow::Result<()> {
    let mut integers: TaggedVec<Unbounded> = TaggedVec::new(ElementKind::Integer);
    let mut floats: TaggedVec<Unbounded> = TaggedVec::new(ElementKind::FloatingPoint);

    for i in 0..10 {
        integers.append(i)?;
        floats.append(f64::from(i) / 2.0)?;
    }

    integers.print();
    floats.print();

    Ok(())
}
