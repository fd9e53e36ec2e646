//! Shared fixtures for the black-box DEPT/EMP scenarios of the spec's
//! testable-properties section. Every scenario in this test suite is built
//! from the canonical SCOTT `DEPT` table (and, for the join scenarios, a
//! matching `EMP` table), so the fixture lives here once rather than being
//! copy-pasted into every test file.

use colstat_core::{Column, Value};
use colstat_engine::InMemoryRows;

pub const DEPTNO: usize = 0;
pub const DNAME: usize = 1;
pub const LOC: usize = 2;

/// `{DEPTNO, DNAME, LOC}`, in that ordinal order.
pub fn dept_columns() -> Vec<Column> {
    vec![
        Column::new(DEPTNO, "DEPTNO"),
        Column::new(DNAME, "DNAME"),
        Column::new(LOC, "LOC"),
    ]
}

/// All four canonical DEPT rows.
pub fn dept_rows() -> Vec<Vec<Value>> {
    vec![
        vec![Value::I64(10), Value::from("ACCOUNTING"), Value::from("NEW YORK")],
        vec![Value::I64(20), Value::from("RESEARCH"), Value::from("DALLAS")],
        vec![Value::I64(30), Value::from("SALES"), Value::from("CHICAGO")],
        vec![Value::I64(40), Value::from("OPERATIONS"), Value::from("BOSTON")],
    ]
}

pub fn dept_in_memory(rows: Vec<Vec<Value>>) -> InMemoryRows {
    InMemoryRows::new(rows)
}

/// EMP ⋈ DEPT on DEPTNO: 14 rows, 11 columns (`EMPNO, ENAME, JOB, MGR,
/// HIREDATE, SAL, COMM, DEPTNO, DEPTNO0, DNAME, LOC` — DEPTNO duplicated
/// because it comes from both sides of the join, the way a SQL join without
/// an explicit column list would report it).
///
/// Hand-built rather than joined in code (the join itself is out of scope
/// for this engine — see spec §1), but engineered to satisfy every
/// property §8 scenario 5 calls out: EMPNO/ENAME are keys, DEPTNO/DEPTNO0
/// each have cardinality 3, SAL has exactly one repeated value pair that
/// agrees on JOB (so `SAL -> JOB` holds without SAL itself becoming a key),
/// and HIREDATE has exactly one repeated value pair that agrees on MGR (so
/// `HIREDATE -> MGR` holds under the same constraint).
pub const EMPNO: usize = 0;
pub const ENAME: usize = 1;
pub const JOB: usize = 2;
pub const MGR: usize = 3;
pub const HIREDATE: usize = 4;
pub const SAL: usize = 5;
pub const COMM: usize = 6;
pub const EMP_DEPTNO: usize = 7;
pub const EMP_DEPTNO0: usize = 8;
pub const EMP_DNAME: usize = 9;
pub const EMP_LOC: usize = 10;

pub fn emp_dept_columns() -> Vec<Column> {
    vec![
        Column::new(EMPNO, "EMPNO"),
        Column::new(ENAME, "ENAME"),
        Column::new(JOB, "JOB"),
        Column::new(MGR, "MGR"),
        Column::new(HIREDATE, "HIREDATE"),
        Column::new(SAL, "SAL"),
        Column::new(COMM, "COMM"),
        Column::new(EMP_DEPTNO, "DEPTNO"),
        Column::new(EMP_DEPTNO0, "DEPTNO0"),
        Column::new(EMP_DNAME, "DNAME"),
        Column::new(EMP_LOC, "LOC"),
    ]
}

pub fn emp_dept_rows() -> Vec<Vec<Value>> {
    // (EMPNO, ENAME, JOB, MGR, HIREDATE as an integer day count, SAL, COMM, DEPTNO)
    let emp: Vec<(i64, &str, &str, Option<i64>, i64, i64, Option<i64>, i64)> = vec![
        (7369, "SMITH", "CLERK", Some(7902), 19801217, 800, None, 20),
        (7499, "ALLEN", "SALESMAN", Some(7698), 19810220, 1600, Some(300), 30),
        (7521, "WARD", "SALESMAN", Some(7698), 19810222, 1250, Some(500), 30),
        (7566, "JONES", "MANAGER", Some(7839), 19810402, 2975, None, 20),
        (7654, "MARTIN", "SALESMAN", Some(7698), 19810928, 1250, Some(1400), 30),
        (7698, "BLAKE", "MANAGER", Some(7839), 19810501, 2850, None, 30),
        (7782, "CLARK", "MANAGER", Some(7839), 19810609, 2450, None, 10),
        (7788, "SCOTT", "ANALYST", Some(7566), 19870419, 3000, None, 20),
        (7839, "KING", "PRESIDENT", None, 19811117, 5000, None, 10),
        // Shares HIREDATE with JAMES below; both report to 7698, so
        // `HIREDATE -> MGR` holds without HIREDATE becoming a key.
        (7844, "TURNER", "SALESMAN", Some(7698), 19811203, 1500, Some(0), 30),
        (7876, "ADAMS", "CLERK", Some(7788), 19870523, 1100, None, 20),
        (7900, "JAMES", "CLERK", Some(7698), 19811203, 950, None, 30),
        // Shares SAL with SCOTT above; both are ANALYSTs, so `SAL -> JOB`
        // holds without SAL itself becoming a key.
        (7902, "FORD", "ANALYST", Some(7566), 19811204, 3000, None, 20),
        (7934, "MILLER", "CLERK", Some(7782), 19820123, 1300, None, 10),
    ];

    let dept_name_loc = |deptno: i64| -> (&'static str, &'static str) {
        match deptno {
            10 => ("ACCOUNTING", "NEW YORK"),
            20 => ("RESEARCH", "DALLAS"),
            30 => ("SALES", "CHICAGO"),
            40 => ("OPERATIONS", "BOSTON"),
            _ => unreachable!("fixture only uses depts 10/20/30/40"),
        }
    };

    emp.into_iter()
        .map(|(empno, ename, job, mgr, hiredate, sal, comm, deptno)| {
            let (dname, loc) = dept_name_loc(deptno);
            vec![
                Value::I64(empno),
                Value::from(ename),
                Value::from(job),
                mgr.map(Value::I64).unwrap_or(Value::Null),
                Value::I64(hiredate),
                Value::I64(sal),
                comm.map(Value::I64).unwrap_or(Value::Null),
                Value::I64(deptno),
                Value::I64(deptno),
                Value::from(dname),
                Value::from(loc),
            ]
        })
        .collect()
}

pub fn emp_dept_in_memory() -> InMemoryRows {
    InMemoryRows::new(emp_dept_rows())
}
