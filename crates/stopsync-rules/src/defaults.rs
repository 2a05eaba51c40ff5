//! Built-in rule tables used when no rules file is supplied.

/// Tokens always rendered fully uppercase.
pub const UPPERCASE_TOKENS: &[&str] = &[
    "AEON", "BRT", "CIMB", "DBKL", "HQ", "IIUM", "IKEA", "JKR", "KFC", "KL", "KLCC", "KLIA",
    "KLIA2", "KPJ", "KTM", "LDP", "LRT", "MBPJ", "MPAJ", "MRT", "MSU", "OPP", "PJ", "PKNS", "PPR",
    "PPRT", "RHB", "SJK", "SJKC", "SK", "SMK", "SRK", "SS", "TNB", "UITM", "UKM", "UM", "UOA",
    "UPM", "USJ",
];

/// Abbreviated street-type tokens and their expansions.
pub const STREET_TYPES: &[(&str, &str)] = &[
    ("BDR", "Bandar"),
    ("BKT", "Bukit"),
    ("JL", "Jalan"),
    ("JLN", "Jalan"),
    ("KG", "Kampung"),
    ("KPG", "Kampung"),
    ("LBH", "Lebuh"),
    ("LBHRAYA", "Lebuhraya"),
    ("LRG", "Lorong"),
    ("PDG", "Padang"),
    ("PRSN", "Persiaran"),
    ("PSN", "Persiaran"),
    ("SEK", "Seksyen"),
    ("SG", "Sungai"),
    ("SGI", "Sungai"),
    ("TMN", "Taman"),
];

/// Agency prefixes of stop codes embedded in stop names, in scan order.
pub const CODE_PREFIXES: &[&str] = &[
    "KL", "PJ", "SJ", "SA", "SL", "SP", "AJ", "KS", "LG", "KJ", "PPJ", "BD",
];

/// Routes designated as rail feeders.
pub const FEEDER_ROUTES: &[&str] = &[
    "T100", "T101", "T102", "T103", "T104", "T105", "T106", "T107", "T108", "T109", "T110",
    "T111", "T112", "T113", "T114", "T115", "T117", "T118", "T119", "T121", "T152", "T154",
    "T155", "T180", "T305", "T352", "T400", "T401", "T402", "T407", "T408", "T409", "T410",
    "T411", "T412", "T413", "T414", "T415", "T416", "T417", "T418", "T419", "T451", "T453",
    "T454", "T455", "T456", "T457", "T458", "T459", "T460", "T461", "T462", "T463", "T464",
    "T465", "T504", "T505", "T506", "T507", "T508", "T509", "T510", "T511", "T512", "T542",
    "T543", "T544", "T545", "T559", "T560", "T561", "T562", "T563", "T564", "T565", "T566",
    "T567", "T568", "T569", "T585", "T586", "T587", "T588", "T589", "T772", "T801", "T802",
    "T803", "T804", "T805", "T807", "T808", "T809", "T810", "T811", "T812", "T813", "T814",
    "T815", "T816", "T817", "T818", "T819", "T820", "T821", "T852",
];
