//! Static configuration for the thirteen measurement sheets.
//!
//! Each entry maps a sheet name to its source BOQ row, unit label, header
//! layout variant, and summary block. The row numbers, column letters, and
//! formula strings are fixed by the billing template and must be written
//! verbatim; they are configuration, not derived data.

/// Column-header layout variants for measurement sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Nine columns: No./Length/Breadth/Height/Quantity.
    Standard,
    /// Twelve columns with two breadths averaged (sheet 3-2).
    AverageBreadth,
    /// Twelve columns with base/top trapezoidal measures (sheets 3-4, 3-5).
    Trapezoidal,
    /// Twelve columns for slab thickness (sheet 4-1).
    Slab,
    /// Two-row, 24-column rebar layout with four bar-type blocks (sheet 4-2).
    Reinforcement,
}

/// Placement and formulas of a measurement sheet's summary rows.
#[derive(Debug, Clone, Copy)]
pub enum SummaryRows {
    /// Three consecutive rows: total, previous bill, this bill.
    Block {
        label_col: &'static str,
        value_col: &'static str,
        first_row: u32,
        total: &'static str,
        previous_label: &'static str,
        previous: &'static str,
        this_bill: &'static str,
    },
    /// The rebar sheet's four-row block (KG total, MT total, previous,
    /// this bill) at T16:X19.
    ReinforcementKg {
        total: &'static str,
        total_mt: &'static str,
        previous: &'static str,
        this_bill: &'static str,
    },
}

/// One measurement sheet: name, source BOQ row, unit, layout, summary.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementItem {
    pub name: &'static str,
    pub boq_row: u32,
    pub unit: &'static str,
    pub layout: HeaderLayout,
    pub summary: SummaryRows,
}

/// The thirteen measurement sheets, in creation order.
pub const MEASUREMENT_ITEMS: [MeasurementItem; 13] = [
    MeasurementItem {
        name: "1-1",
        boq_row: 19,
        unit: "PS",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 19,
            total: "=H12",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L19",
            this_bill: "=H19-H20",
        },
    },
    MeasurementItem {
        name: "1-2",
        boq_row: 20,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 19,
            total: "=H12",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L20",
            this_bill: "=H19-H20",
        },
    },
    MeasurementItem {
        name: "2-1",
        boq_row: 23,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 17,
            total: "=SUM(H14:H15)",
            previous_label: "Previous bill Quantity",
            previous: "=BOQ!L25",
            this_bill: "=H17-H18",
        },
    },
    MeasurementItem {
        name: "3-1",
        boq_row: 26,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 34,
            total: "=SUM(H15:H33)",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L26",
            this_bill: "=H34-H35",
        },
    },
    MeasurementItem {
        name: "3-2",
        boq_row: 27,
        unit: "m3",
        layout: HeaderLayout::AverageBreadth,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "J",
            first_row: 29,
            total: "=SUM(J15:J28)",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L27",
            this_bill: "=J29-J30",
        },
    },
    MeasurementItem {
        name: "3-3",
        boq_row: 28,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 25,
            total: "=SUM(H15:H24)",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L28",
            this_bill: "=H25-H26",
        },
    },
    MeasurementItem {
        name: "3-4",
        boq_row: 29,
        unit: "m3",
        layout: HeaderLayout::Trapezoidal,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "J",
            first_row: 22,
            total: "=SUM(J16:J21)",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L29",
            this_bill: "=J22-J23",
        },
    },
    MeasurementItem {
        name: "3-5",
        boq_row: 30,
        unit: "m3",
        layout: HeaderLayout::Trapezoidal,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "J",
            first_row: 22,
            total: "=SUM(J16:J21)",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L30",
            this_bill: "=J22-J23",
        },
    },
    MeasurementItem {
        name: "3-6",
        boq_row: 31,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 19,
            total: "=H12",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L31",
            this_bill: "=H19-H20",
        },
    },
    MeasurementItem {
        name: "3-7",
        boq_row: 32,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 19,
            total: "=H12",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L32",
            this_bill: "=H19-H20",
        },
    },
    MeasurementItem {
        name: "3-8",
        boq_row: 33,
        unit: "m3",
        layout: HeaderLayout::Standard,
        summary: SummaryRows::Block {
            label_col: "E",
            value_col: "H",
            first_row: 19,
            total: "=H12",
            previous_label: "Pervious Bill Quantity",
            previous: "=BOQ!L33",
            this_bill: "=H19-H20",
        },
    },
    MeasurementItem {
        name: "4-1",
        boq_row: 36,
        unit: "m3",
        layout: HeaderLayout::Slab,
        summary: SummaryRows::Block {
            label_col: "G",
            value_col: "J",
            first_row: 28,
            total: "=SUM(J15:J27)",
            previous_label: "Pervious bill Quantity",
            previous: "=BOQ!L36",
            this_bill: "=J28-J29",
        },
    },
    MeasurementItem {
        name: "4-2",
        boq_row: 37,
        unit: "m3",
        layout: HeaderLayout::Reinforcement,
        summary: SummaryRows::ReinforcementKg {
            total: "=SUM(X15:X15)",
            total_mt: "=TRUNC(X16/1000,2)",
            previous: "=BOQ!L37",
            this_bill: "=X17",
        },
    },
];

impl HeaderLayout {
    /// Single-row header labels (row 12). The reinforcement layout uses a
    /// two-row header instead; see [`HeaderLayout::REINFORCEMENT_TOP`] and
    /// [`HeaderLayout::REINFORCEMENT_SUB`].
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            HeaderLayout::Standard => &[
                "S.N.",
                "Description of works",
                "Unit",
                "No.",
                "Length (m)",
                "Breadth (m)",
                "Height (m)",
                "Quantity",
                "Remarks",
            ],
            HeaderLayout::AverageBreadth => &[
                "S.N.",
                "Description of works",
                "Unit",
                "No.",
                "Length (m)",
                "Breadth b1 (m)",
                "Breadth b2 (m)",
                "Average Breadth B=(b1+b2)/2 (m)",
                "Height (m)",
                "Quantity",
                "Remarks",
                "IPCs",
            ],
            HeaderLayout::Trapezoidal => &[
                "S.N.",
                "Description of works",
                "Unit",
                "No.",
                "Length (L)",
                "Base",
                "Top",
                "Avg Breadth (B)",
                "Height (H)",
                "Quantity Q = L*B*H",
                "Remarks",
                "IPCs",
            ],
            HeaderLayout::Slab => &[
                "",
                "Description of works",
                "Unit",
                "",
                "Length (m)",
                "Breadth (b1)",
                "Breadth (b2)",
                "Breadth B = (b1+b2)/2",
                "Thickness (H)",
                "Quantity (Q ) = L*B*H",
                "Remarks",
                "IPCs",
            ],
            HeaderLayout::Reinforcement => Self::REINFORCEMENT_TOP,
        }
    }

    /// Whether the layout carries the wider I-L measurement columns.
    #[must_use]
    pub fn has_extra_columns(self) -> bool {
        matches!(
            self,
            HeaderLayout::AverageBreadth | HeaderLayout::Trapezoidal | HeaderLayout::Slab
        )
    }

    /// Top header row of the rebar layout (row 13). Spellings follow the
    /// deployed template verbatim.
    pub const REINFORCEMENT_TOP: &'static [&'static str] = &[
        "S.N.",
        "Description of works",
        "",
        "Main bar",
        "",
        "",
        "",
        "Distrinution Bar",
        "",
        "",
        "",
        "Dowel Bar",
        "",
        "",
        "",
        "Tie Bar",
        "",
        "",
        "",
        "Total Quantity Q = Q1+Q2+Q3+Q4",
        "Remarks",
    ];

    /// Sub-header row of the rebar layout (row 14): four repeated
    /// No./Length/Dia/Unit-weight/Quantity blocks.
    pub const REINFORCEMENT_SUB: &'static [&'static str] = &[
        "",
        "",
        "Unit",
        "No.",
        "Length (m)",
        "Dia (m)",
        "Unit wt (kg)",
        "Quantity (Q1)",
        "No.",
        "Length (m)",
        "Dia (m)",
        "Unit wt (kg)",
        "Quantity (Q2)",
        "No.",
        "Length (m)",
        "Dia (m)",
        "Unit wt (kg)",
        "Quantity (Q3)",
        "No.",
        "Length (m)",
        "Dia (m)",
        "Unit wt (kg)",
        "Quantity (Q4)",
        "",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_items_in_order() {
        let names: Vec<&str> = MEASUREMENT_ITEMS.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "1-1", "1-2", "2-1", "3-1", "3-2", "3-3", "3-4", "3-5", "3-6", "3-7", "3-8",
                "4-1", "4-2"
            ]
        );
    }

    #[test]
    fn test_boq_rows_ascend() {
        let rows: Vec<u32> = MEASUREMENT_ITEMS.iter().map(|i| i.boq_row).collect();
        assert_eq!(rows, vec![19, 20, 23, 26, 27, 28, 29, 30, 31, 32, 33, 36, 37]);
    }

    #[test]
    fn test_reinforcement_header_widths() {
        assert_eq!(HeaderLayout::REINFORCEMENT_TOP.len(), 21);
        assert_eq!(HeaderLayout::REINFORCEMENT_SUB.len(), 24);
        assert_eq!(HeaderLayout::Standard.columns().len(), 9);
        assert_eq!(HeaderLayout::AverageBreadth.columns().len(), 12);
        assert_eq!(HeaderLayout::Trapezoidal.columns().len(), 12);
        assert_eq!(HeaderLayout::Slab.columns().len(), 12);
    }

    #[test]
    fn test_only_first_item_is_provisional_sum() {
        assert_eq!(MEASUREMENT_ITEMS[0].unit, "PS");
        assert!(MEASUREMENT_ITEMS[1..].iter().all(|i| i.unit == "m3"));
    }
}
