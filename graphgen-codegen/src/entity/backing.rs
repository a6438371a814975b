use graphgen_model::ModelEnum;

/// Fixed-width integer backing an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BackingInt {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl BackingInt {
    /// Smallest integer covering `[min, max]`.
    ///
    /// Unsigned widths are used whenever `min` is non-negative; otherwise the
    /// smallest signed width holding both bounds.
    pub fn for_range(min: i64, max: i64) -> Self {
        if min >= 0 {
            let max = max.max(0) as u64;
            if max <= u8::MAX as u64 {
                BackingInt::U8
            } else if max <= u16::MAX as u64 {
                BackingInt::U16
            } else if max <= u32::MAX as u64 {
                BackingInt::U32
            } else {
                BackingInt::U64
            }
        } else if min >= i8::MIN as i64 && max <= i8::MAX as i64 {
            BackingInt::I8
        } else if min >= i16::MIN as i64 && max <= i16::MAX as i64 {
            BackingInt::I16
        } else if min >= i32::MIN as i64 && max <= i32::MAX as i64 {
            BackingInt::I32
        } else {
            BackingInt::I64
        }
    }

    /// Backing integer for an enumeration's member values.
    pub fn for_enum(model_enum: &ModelEnum) -> Self {
        let (min, max) = value_range(model_enum);
        Self::for_range(min, max)
    }
}

/// Minimum and maximum member values of an enumeration.
///
/// A member without an explicit value counts as 0; no implicit numbering is
/// assumed. An enumeration without members yields `(0, 0)`.
pub fn value_range(model_enum: &ModelEnum) -> (i64, i64) {
    let mut values = model_enum
        .members
        .iter()
        .map(|member| member.value.unwrap_or(0));

    let Some(first) = values.next() else {
        return (0, 0);
    };
    values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}
