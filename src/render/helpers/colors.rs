use printpdf::Rgb;

/// Header band and table header bars (#000000)
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Body text (#1a1a1a)
pub const DARK: Rgb = Rgb {
    r: 0.102,
    g: 0.102,
    b: 0.102,
    icc_profile: None,
};

/// Secondary text and detail labels (#666666)
pub const GRAY: Rgb = Rgb {
    r: 0.4,
    g: 0.4,
    b: 0.4,
    icc_profile: None,
};

/// Footer text (#999999)
pub const LIGHT_GRAY: Rgb = Rgb {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    icc_profile: None,
};

/// Box outlines and section rules (#d4d4d4)
pub const BORDER: Rgb = Rgb {
    r: 0.831,
    g: 0.831,
    b: 0.831,
    icc_profile: None,
};

/// Details box and placeholder fill (#f5f5f5)
pub const LIGHT_BG: Rgb = Rgb {
    r: 0.961,
    g: 0.961,
    b: 0.961,
    icc_profile: None,
};

/// Table row separators (#e5e7eb)
pub const ROW_RULE: Rgb = Rgb {
    r: 0.898,
    g: 0.906,
    b: 0.922,
    icc_profile: None,
};

pub const WHITE: Rgb = Rgb {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    icc_profile: None,
};

/// Company details on the header band (#cccccc)
pub const HEADER_SUBTLE: Rgb = Rgb {
    r: 0.8,
    g: 0.8,
    b: 0.8,
    icc_profile: None,
};

/// Checked box, Completed pill text (#16a34a)
pub const GREEN: Rgb = Rgb {
    r: 0.086,
    g: 0.639,
    b: 0.29,
    icc_profile: None,
};

/// Completed pill fill (#dcfce7)
pub const GREEN_BG: Rgb = Rgb {
    r: 0.863,
    g: 0.988,
    b: 0.906,
    icc_profile: None,
};

/// Unchecked box outline and cross (#dc2626)
pub const RED: Rgb = Rgb {
    r: 0.863,
    g: 0.149,
    b: 0.149,
    icc_profile: None,
};

/// Unchecked box fill (#fef2f2)
pub const RED_BG: Rgb = Rgb {
    r: 0.996,
    g: 0.949,
    b: 0.949,
    icc_profile: None,
};

/// Draft pill text (#d97706)
pub const AMBER: Rgb = Rgb {
    r: 0.851,
    g: 0.467,
    b: 0.024,
    icc_profile: None,
};

/// Draft pill fill (#fef3c7)
pub const AMBER_BG: Rgb = Rgb {
    r: 0.996,
    g: 0.953,
    b: 0.78,
    icc_profile: None,
};
