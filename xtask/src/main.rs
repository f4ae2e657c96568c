use anyhow::{bail, Context, Result};
use apodize::kernel::KernelLifecycle;
use apodize::signal::spectral::{modfreqs, DEFAULT_MIN_BINS};
use apodize::signal::traits::WindowGenerate;
use apodize::signal::windows::{WindowKernel, WindowSpec};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::f64::consts::{LN_10, PI};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

const DEFAULT_PYTHON_BIN: &str = "python";
const ITERS: usize = 50;

const PY_WINDOW_SCRIPT: &str = r#"
import json
import sys
import time
import numpy as np
import scipy
import scipy.signal.windows as windows

env = json.loads(sys.stdin.read())
op = env["op"]
iters = int(env["iters"])
p = env["payload"]

def _window():
    spec = p["window"]
    if isinstance(spec, list):
        spec = tuple(spec)
    return windows.get_window(spec, int(p["len"]), fftbins=bool(p["periodic"]))

def _compute():
    if op == "window":
        return _window()
    if op == "modfreqs":
        w = np.asarray(p["samples"], dtype=float)
        m = max(2 * w.size, int(p["min_bins"]))
        m += m % 2
        half = np.abs(np.fft.fft(w, m)[: m // 2]) ** 2
        return np.concatenate([half[::-1], half])
    raise ValueError(f"unknown op {op}")

y = np.asarray(_compute(), dtype=float).reshape(-1)

t0 = time.perf_counter_ns()
for _ in range(iters):
    _compute()
t1 = time.perf_counter_ns()

print(json.dumps({
    "output": y.tolist(),
    "avg_ns": (t1 - t0) / max(iters, 1),
    "python_version": sys.version.split()[0],
    "numpy_version": np.__version__,
    "scipy_version": scipy.__version__
}))
"#;

#[derive(Debug, Serialize, Deserialize, Clone)]
struct PythonEval {
    output: Vec<f64>,
    avg_ns: f64,
    python_version: String,
    numpy_version: String,
    scipy_version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ContractRow {
    case_id: String,
    pearson_r: f64,
    mae: f64,
    rmse: f64,
    max_abs: f64,
    rust_ns: f64,
    python_ns: f64,
    speedup_vs_python: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContractBundle {
    generated_epoch_seconds: u64,
    python_executable: String,
    python_version: String,
    numpy_version: String,
    scipy_version: String,
    rows: Vec<ContractRow>,
}

/// One window compared against `scipy.signal.windows.get_window`.
struct WindowCase {
    name: &'static str,
    params: Vec<f64>,
    periodic: bool,
    len: usize,
    scipy: serde_json::Value,
}

impl WindowCase {
    fn new(name: &'static str, len: usize, periodic: bool, scipy: serde_json::Value) -> Self {
        Self {
            name,
            params: Vec::new(),
            periodic,
            len,
            scipy,
        }
    }

    fn with_params(mut self, params: &[f64]) -> Self {
        self.params = params.to_vec();
        self
    }

    fn case_id(&self) -> String {
        let form = if self.periodic { "periodic" } else { "symmetric" };
        format!("window_{}_{}_{form}", self.name, self.len)
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("contracts") => run_contracts(),
        _ => {
            eprintln!("Usage:");
            eprintln!("  cargo run -p xtask -- contracts");
            Ok(())
        }
    }
}

fn window_cases() -> Vec<WindowCase> {
    let mut cases = Vec::new();
    for (len, periodic) in [(64usize, false), (65, false), (64, true)] {
        let half = (len + usize::from(periodic) - 1) as f64 / 2.0;
        cases.extend([
            WindowCase::new("rectangular", len, periodic, json!("boxcar")),
            WindowCase::new("bartlett", len, periodic, json!("bartlett")),
            WindowCase::new("triangular", len, periodic, json!("triang")),
            WindowCase::new("hann", len, periodic, json!("hann")),
            WindowCase::new("hamming", len, periodic, json!("hamming")),
            WindowCase::new("blackman", len, periodic, json!("blackman")),
            WindowCase::new("blackman_harris4", len, periodic, json!("blackmanharris")),
            WindowCase::new("blackman_nuttall", len, periodic, json!("nuttall")),
            WindowCase::new("flattop", len, periodic, json!("flattop")),
            WindowCase::new("barthann", len, periodic, json!("barthann")),
            WindowCase::new("bohman", len, periodic, json!("bohman")),
            WindowCase::new("cosine", len, periodic, json!("cosine")),
            WindowCase::new("lanczos", len, periodic, json!("lanczos")),
            WindowCase::new("tukey", len, periodic, json!(["tukey", 0.5])).with_params(&[0.5]),
            WindowCase::new("hamming_gen", len, periodic, json!(["general_hamming", 0.6]))
                .with_params(&[0.6]),
            WindowCase::new("kaiser", len, periodic, json!(["kaiser", 3.0 * PI]))
                .with_params(&[3.0]),
            WindowCase::new("gaussian", len, periodic, json!(["gaussian", half / 2.5]))
                .with_params(&[2.5]),
            WindowCase::new(
                "exponential",
                len,
                periodic,
                json!(["exponential", null, half / (60.0 * LN_10 / 20.0)]),
            )
            .with_params(&[60.0]),
        ]);
        if !periodic {
            cases.extend([
                WindowCase::new("parzen_octave", len, false, json!("parzen")),
                WindowCase::new("chebyshev", len, false, json!(["chebwin", 80.0]))
                    .with_params(&[80.0]),
            ]);
        }
    }
    cases
}

fn run_contracts() -> Result<()> {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let out_dir = PathBuf::from(format!("target/contracts/{ts}"));
    fs::create_dir_all(&out_dir).context("creating contract output directories")?;

    let python_bin = detect_python_bin();
    let mut rows = Vec::new();

    for case in window_cases() {
        let case_id = case.case_id();
        let kernel = WindowKernel::try_new(
            WindowSpec::new(case.name, case.len, case.params.clone(), case.periodic).into(),
        )
        .with_context(|| format!("building kernel for {case_id}"))?;
        let candidate = kernel.run_alloc()?;
        let rust_ns = benchmark_avg_ns(ITERS, || {
            kernel.run_alloc()?;
            Ok(())
        })?;
        let py = python_window_eval(
            &python_bin,
            "window",
            json!({
                "window": case.scipy,
                "len": case.len,
                "periodic": case.periodic,
            }),
            ITERS,
        )
        .with_context(|| format!("evaluating scipy reference for {case_id}"))?;
        record_case(&mut rows, &case_id, &candidate, &py, rust_ns)?;
    }

    // Frequency response folded about zero frequency, rebuilt from numpy's FFT.
    for (len, min_bins) in [(64usize, DEFAULT_MIN_BINS), (301, 501)] {
        let case_id = format!("modfreqs_hann_{len}_{min_bins}");
        let samples = WindowKernel::try_new(WindowSpec::new("hann", len, (), false).into())?
            .run_alloc()?;
        let candidate = modfreqs(&samples, min_bins)?;
        let rust_ns = benchmark_avg_ns(ITERS, || {
            modfreqs(&samples, min_bins)?;
            Ok(())
        })?;
        let py = python_window_eval(
            &python_bin,
            "modfreqs",
            json!({ "samples": samples, "min_bins": min_bins }),
            ITERS,
        )?;
        record_case(&mut rows, &case_id, &candidate, &py, rust_ns)?;
    }

    let versions = python_versions(&python_bin)?;
    let bundle = ContractBundle {
        generated_epoch_seconds: ts,
        python_executable: python_bin.to_string_lossy().into_owned(),
        python_version: versions.python_version,
        numpy_version: versions.numpy_version,
        scipy_version: versions.scipy_version.unwrap_or_default(),
        rows,
    };

    let summary_json = out_dir.join("contracts.json");
    fs::write(
        &summary_json,
        serde_json::to_vec_pretty(&bundle).context("serializing contract bundle")?,
    )
    .with_context(|| format!("writing {}", summary_json.display()))?;
    write_summary_csv(&out_dir.join("summary.csv"), &bundle.rows)?;

    let worst = bundle
        .rows
        .iter()
        .map(|row| row.max_abs)
        .fold(0.0, f64::max);
    println!("Contracts written to {}", out_dir.display());
    println!("  - {}", summary_json.display());
    println!("  - {}", out_dir.join("summary.csv").display());
    println!("  - cases: {}", bundle.rows.len());
    println!("  - worst max_abs: {worst:.3e}");

    Ok(())
}

fn detect_python_bin() -> PathBuf {
    std::env::var_os("APODIZE_PYTHON")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON_BIN))
}

fn python_versions(python_bin: &Path) -> Result<PythonEval> {
    run_python_eval(
        python_bin,
        r#"
import json, sys
import numpy
import scipy
payload = json.loads(sys.stdin.read())
print(json.dumps({
    "output": [],
    "avg_ns": 0.0,
    "python_version": sys.version.split()[0],
    "numpy_version": numpy.__version__,
    "scipy_version": scipy.__version__
}))
"#,
        json!({}),
    )
}

fn python_window_eval(
    python_bin: &Path,
    op: &str,
    payload: serde_json::Value,
    iters: usize,
) -> Result<PythonEval> {
    run_python_eval(
        python_bin,
        PY_WINDOW_SCRIPT,
        json!({
            "op": op,
            "iters": iters,
            "payload": payload
        }),
    )
}

fn run_python_eval(
    python_bin: &Path,
    script: &str,
    payload: serde_json::Value,
) -> Result<PythonEval> {
    let mut child = Command::new(python_bin)
        .arg("-c")
        .arg(script)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawning python interpreter at {}", python_bin.display()))?;

    {
        let stdin = child.stdin.as_mut().context("opening python stdin")?;
        let payload_bytes = serde_json::to_vec(&payload).context("serializing python payload")?;
        stdin
            .write_all(&payload_bytes)
            .context("writing payload to python stdin")?;
    }

    let output = child
        .wait_with_output()
        .context("waiting for python process")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("python execution failed: {stderr}");
    }
    let stdout = String::from_utf8(output.stdout).context("parsing python stdout utf8")?;
    let parsed: PythonEval = serde_json::from_str(stdout.trim()).context("parsing python json")?;
    Ok(parsed)
}

fn record_case(
    rows: &mut Vec<ContractRow>,
    case_id: &str,
    candidate: &[f64],
    py: &PythonEval,
    rust_ns: f64,
) -> Result<()> {
    ensure_same_length(case_id, candidate, &py.output)?;
    rows.push(ContractRow {
        case_id: case_id.to_string(),
        pearson_r: pearson(candidate, &py.output),
        mae: mean_abs_error(candidate, &py.output),
        rmse: root_mean_squared_error(candidate, &py.output),
        max_abs: max_abs_error(candidate, &py.output),
        rust_ns,
        python_ns: py.avg_ns,
        speedup_vs_python: py.avg_ns / rust_ns,
    });
    Ok(())
}

fn ensure_same_length(case_id: &str, a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        bail!(
            "case {case_id} has mismatched output lengths: left={}, right={}",
            a.len(),
            b.len()
        );
    }
    Ok(())
}

fn benchmark_avg_ns<F>(iters: usize, mut f: F) -> Result<f64>
where
    F: FnMut() -> Result<()>,
{
    let start = Instant::now();
    for _ in 0..iters {
        f()?;
    }
    Ok(start.elapsed().as_nanos() as f64 / iters as f64)
}

fn mean_abs_error(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f64>()
        / a.len() as f64
}

fn root_mean_squared_error(a: &[f64], b: &[f64]) -> f64 {
    (a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        / a.len() as f64)
        .sqrt()
}

fn max_abs_error(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let da = *x - mean_a;
        let db = *y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        if a == b {
            1.0
        } else {
            0.0
        }
    } else {
        cov / (var_a.sqrt() * var_b.sqrt())
    }
}

fn write_summary_csv(path: &Path, rows: &[ContractRow]) -> Result<()> {
    let mut out = String::new();
    out.push_str("case_id,pearson_r,mae,rmse,max_abs,rust_ns,python_ns,speedup_vs_python\n");
    for row in rows {
        out.push_str(&format!(
            "{},{:.12},{:.12},{:.12},{:.12},{:.3},{:.3},{:.6}\n",
            row.case_id,
            row.pearson_r,
            row.mae,
            row.rmse,
            row.max_abs,
            row.rust_ns,
            row.python_ns,
            row.speedup_vs_python,
        ));
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}
