use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[tokio::test]
async fn plot_savings_creates_png() {
    let input_yaml = "monthly_invoice_volume: 500\nnum_ap_staff: 1\navg_hours_per_invoice: 0.25\nhourly_wage: 30\nerror_rate_manual: 1.2\nerror_cost: 40\ntime_horizon_months: 24\none_time_implementation_cost: 15000\n";

    let input_file = assert_fs::NamedTempFile::new("input.yaml").unwrap();
    input_file.write_str(input_yaml).unwrap();
    let output_file = assert_fs::NamedTempFile::new("savings.png").unwrap();

    let input_arg = input_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("invoice-roi");
    cmd.args(["plot-savings", "-i", &input_arg, "-o", &output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Savings plot written to"));

    let metadata = fs::metadata(output_arg).unwrap();
    assert!(metadata.len() > 0);
}
