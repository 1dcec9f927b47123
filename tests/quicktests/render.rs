use quickcheck_macros::quickcheck;

use midbst::render;

use crate::SmallRange;

#[quickcheck]
fn one_line_per_value(range: SmallRange) -> bool {
    let lines = render(&range.build());
    let mut values: Vec<i64> = lines
        .iter()
        .map(|line| {
            line.rsplit(' ')
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap()
        })
        .collect();
    values.sort_unstable();

    values.into_iter().eq(range.low..=range.high)
}

#[quickcheck]
fn root_line_has_no_indent(range: SmallRange) -> bool {
    let tree = range.build();
    let lines = render(&tree);
    let root = tree.root().unwrap().value();

    lines[0] == format!("└── {}", root)
}
