//! Operand unpacking and classification.
//!
//! Splits a raw bit pattern into sign, biased exponent, and mantissa, and
//! assigns exactly one of the six value categories. The ten externally
//! visible classification flags are signed combinations of the categories;
//! exactly one flag is true for every input pattern.

use crate::common::format::FormatParams;

/// Mutually exclusive value category of an operand.
///
/// A pure function of the biased exponent and mantissa fields; never two
/// categories apply to the same bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Exponent and mantissa both zero.
    Zero,
    /// Exponent zero, mantissa nonzero.
    Denormal,
    /// Exponent strictly between zero and all-ones.
    Normal,
    /// Exponent all-ones, mantissa zero.
    Infinity,
    /// Exponent all-ones, mantissa nonzero with its top bit set.
    QuietNan,
    /// Exponent all-ones, mantissa nonzero with its top bit clear.
    SignalingNan,
}

/// An operand split into its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Sign bit.
    pub sign: bool,
    /// Biased exponent field.
    pub exponent: u32,
    /// Stored mantissa field (implicit bit excluded).
    pub mantissa: u64,
    /// Value category derived from the exponent and mantissa fields.
    pub category: Category,
}

impl Operand {
    /// Implicit-bit-extended significand: leading bit 1 for normal
    /// operands, 0 for zeros and denormals.
    pub fn significand(&self, params: &FormatParams) -> u64 {
        let implicit = (self.exponent != 0) as u64;
        (implicit << params.mantissa_width) | self.mantissa
    }

    /// Exponent used for arithmetic: denormals compute with exponent 1
    /// in place of their stored 0.
    pub fn effective_exponent(&self) -> i32 {
        if self.exponent == 0 {
            1
        } else {
            self.exponent as i32
        }
    }

    /// True for quiet and signaling NaNs.
    pub fn is_nan(&self) -> bool {
        matches!(self.category, Category::QuietNan | Category::SignalingNan)
    }

    /// True for positive and negative infinity.
    pub fn is_inf(&self) -> bool {
        self.category == Category::Infinity
    }

    /// True for positive and negative zero.
    pub fn is_zero(&self) -> bool {
        self.category == Category::Zero
    }
}

/// The ten classification flags of the hardware classify port.
///
/// Exactly one flag is true for every bit pattern of a supported width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassifyFlags {
    pub is_snan: bool,
    pub is_qnan: bool,
    pub is_neg_inf: bool,
    pub is_neg_normal: bool,
    pub is_neg_denormal: bool,
    pub is_neg_zero: bool,
    pub is_pos_zero: bool,
    pub is_pos_denormal: bool,
    pub is_pos_normal: bool,
    pub is_pos_inf: bool,
}

impl ClassifyFlags {
    /// Counts how many flags are set. The classifier invariant is that
    /// this is always exactly one.
    pub fn count_set(&self) -> u32 {
        [
            self.is_snan,
            self.is_qnan,
            self.is_neg_inf,
            self.is_neg_normal,
            self.is_neg_denormal,
            self.is_neg_zero,
            self.is_pos_zero,
            self.is_pos_denormal,
            self.is_pos_normal,
            self.is_pos_inf,
        ]
        .iter()
        .map(|&b| b as u32)
        .sum()
    }

    /// Flag names in wire order, paired with their values.
    pub fn named(&self) -> [(&'static str, bool); 10] {
        [
            ("is_snan", self.is_snan),
            ("is_qnan", self.is_qnan),
            ("is_neg_inf", self.is_neg_inf),
            ("is_neg_normal", self.is_neg_normal),
            ("is_neg_denormal", self.is_neg_denormal),
            ("is_neg_zero", self.is_neg_zero),
            ("is_pos_zero", self.is_pos_zero),
            ("is_pos_denormal", self.is_pos_denormal),
            ("is_pos_normal", self.is_pos_normal),
            ("is_pos_inf", self.is_pos_inf),
        ]
    }

    /// The name of the single set flag.
    pub fn class_name(&self) -> &'static str {
        self.named()
            .iter()
            .find(|&&(_, set)| set)
            .map(|&(name, _)| name)
            .unwrap_or("none")
    }
}

/// Splits a raw bit pattern into sign, exponent, mantissa, and category.
pub fn unpack(bits: u64, params: &FormatParams) -> Operand {
    let sign = (bits >> (params.total_width - 1)) & 1 != 0;
    let exponent = ((bits >> params.mantissa_width) as u32) & params.exp_all_ones();
    let mantissa = bits & params.mantissa_mask();

    let category = if exponent == params.exp_all_ones() {
        if mantissa == 0 {
            Category::Infinity
        } else if mantissa & params.quiet_bit() != 0 {
            Category::QuietNan
        } else {
            Category::SignalingNan
        }
    } else if exponent == 0 {
        if mantissa == 0 {
            Category::Zero
        } else {
            Category::Denormal
        }
    } else {
        Category::Normal
    };

    Operand {
        sign,
        exponent,
        mantissa,
        category,
    }
}

/// Produces the ten classification flags for a bit pattern.
pub fn classify(bits: u64, params: &FormatParams) -> ClassifyFlags {
    let op = unpack(bits, params);
    let mut flags = ClassifyFlags::default();

    match op.category {
        Category::SignalingNan => flags.is_snan = true,
        Category::QuietNan => flags.is_qnan = true,
        Category::Infinity => {
            if op.sign {
                flags.is_neg_inf = true;
            } else {
                flags.is_pos_inf = true;
            }
        }
        Category::Normal => {
            if op.sign {
                flags.is_neg_normal = true;
            } else {
                flags.is_pos_normal = true;
            }
        }
        Category::Denormal => {
            if op.sign {
                flags.is_neg_denormal = true;
            } else {
                flags.is_pos_denormal = true;
            }
        }
        Category::Zero => {
            if op.sign {
                flags.is_neg_zero = true;
            } else {
                flags.is_pos_zero = true;
            }
        }
    }

    flags
}
