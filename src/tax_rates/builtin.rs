//! Built-in property tax data
//!
//! Zip-level rates for major metro areas and state-wide averages, used when
//! no CSV data directory is supplied.

/// US national average property tax rate
pub const NATIONAL_AVERAGE_RATE: f64 = 0.0121;

/// (zip, rate, city, state, county)
pub const ZIP_RATES: &[(&str, f64, &str, &str, &str)] = &[
    ("75001", 0.0235, "Addison", "TX", "Dallas County"),
    ("75201", 0.0241, "Dallas", "TX", "Dallas County"),
    ("77001", 0.0267, "Houston", "TX", "Harris County"),
    ("78701", 0.0243, "Austin", "TX", "Travis County"),
    ("78201", 0.0253, "San Antonio", "TX", "Bexar County"),
    ("90210", 0.0075, "Beverly Hills", "CA", "Los Angeles County"),
    ("94102", 0.0074, "San Francisco", "CA", "San Francisco County"),
    ("94301", 0.0069, "Palo Alto", "CA", "Santa Clara County"),
    ("90001", 0.0075, "Los Angeles", "CA", "Los Angeles County"),
    ("10001", 0.0123, "New York", "NY", "New York County"),
    ("11201", 0.0087, "Brooklyn", "NY", "Kings County"),
    ("10301", 0.0087, "Staten Island", "NY", "Richmond County"),
    ("33101", 0.0127, "Miami", "FL", "Miami-Dade County"),
    ("32801", 0.0109, "Orlando", "FL", "Orange County"),
    ("33601", 0.0123, "Tampa", "FL", "Hillsborough County"),
    ("60601", 0.0231, "Chicago", "IL", "Cook County"),
    ("07001", 0.0249, "Avenel", "NJ", "Middlesex County"),
    ("07302", 0.0124, "Jersey City", "NJ", "Hudson County"),
    ("89101", 0.0084, "Las Vegas", "NV", "Clark County"),
    ("98101", 0.0092, "Seattle", "WA", "King County"),
    ("80201", 0.0055, "Denver", "CO", "Denver County"),
    ("85001", 0.0066, "Phoenix", "AZ", "Maricopa County"),
    ("02101", 0.0105, "Boston", "MA", "Suffolk County"),
    ("30301", 0.0107, "Atlanta", "GA", "Fulton County"),
    ("27601", 0.0084, "Raleigh", "NC", "Wake County"),
    ("37201", 0.0063, "Nashville", "TN", "Davidson County"),
    ("43215", 0.0159, "Columbus", "OH", "Franklin County"),
    ("48201", 0.0249, "Detroit", "MI", "Wayne County"),
];

/// (state abbreviation, average rate)
pub const STATE_AVERAGES: &[(&str, f64)] = &[
    ("AL", 0.0041), ("AK", 0.0113), ("AZ", 0.0066), ("AR", 0.0062), ("CA", 0.0075),
    ("CO", 0.0051), ("CT", 0.0208), ("DE", 0.0057), ("FL", 0.0083), ("GA", 0.0092),
    ("HI", 0.0031), ("ID", 0.0069), ("IL", 0.0218), ("IN", 0.0085), ("IA", 0.0154),
    ("KS", 0.0141), ("KY", 0.0086), ("LA", 0.0056), ("ME", 0.0133), ("MD", 0.0109),
    ("MA", 0.0121), ("MI", 0.0154), ("MN", 0.0111), ("MS", 0.0059), ("MO", 0.0098),
    ("MT", 0.0084), ("NE", 0.0178), ("NV", 0.0084), ("NH", 0.0186), ("NJ", 0.0249),
    ("NM", 0.0080), ("NY", 0.0173), ("NC", 0.0084), ("ND", 0.0098), ("OH", 0.0157),
    ("OK", 0.0090), ("OR", 0.0087), ("PA", 0.0135), ("RI", 0.0147), ("SC", 0.0057),
    ("SD", 0.0128), ("TN", 0.0067), ("TX", 0.0181), ("UT", 0.0061), ("VT", 0.0190),
    ("VA", 0.0083), ("WA", 0.0093), ("WV", 0.0059), ("WI", 0.0169), ("WY", 0.0062),
];

/// (label, rate, description) presets offered when no zip is entered
pub const SUGGESTED_RATES: &[(&str, f64, &str)] = &[
    ("Texas (Dallas/Houston)", 0.024, "High property taxes, no state income tax"),
    ("California (Bay Area)", 0.007, "Low property tax rate, high home values"),
    ("New Jersey", 0.025, "Highest property taxes in US"),
    ("Florida", 0.010, "No state income tax, moderate property taxes"),
    ("New York (NYC)", 0.012, "High property taxes, expensive real estate"),
    ("Nevada", 0.008, "No state income tax, low property taxes"),
    ("US National Average", 0.012, "Average across all US states"),
];
