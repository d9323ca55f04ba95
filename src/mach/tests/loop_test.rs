use super::*;

#[test]
fn test_do_until() {
    let mut r = runtime("10 I=0 @ I=I+1 ?=I @=(I=3) \"!\"\n");
    assert_eq!(run(&mut r), "123!");
    assert!(r.stack.is_empty());
}

#[test]
fn test_do_until_runs_body_once() {
    let mut r = runtime("10 @ \"once\" @=(1)\n");
    assert_eq!(run(&mut r), "once");
}

#[test]
fn test_do_until_across_lines() {
    let mut r = runtime("10 N=0 @\n20 N=N+1 ?=N\n30 @=(N>=2)\n40 \"end\"\n");
    assert_eq!(run(&mut r), "12end");
}

#[test]
fn test_until_without_do_is_ignored() {
    let mut r = runtime("10 @=(0) \"on\"\n");
    assert_eq!(run(&mut r), "on");
}

#[test]
fn test_step_without_loop_is_ignored() {
    let mut r = runtime("10 @=I+1 ?=I\n");
    assert_eq!(run(&mut r), "0");
}

#[test]
fn test_return_does_not_pop_loop_frame() {
    let mut r = runtime("10 @ ] \"x\" @=(1)\n");
    assert_eq!(run(&mut r), "x");
    assert!(r.stack.is_empty());
}

#[test]
fn test_nested_gosub() {
    let mut r = runtime(concat!(
        "10 !=100 \"c\"/\n",
        "20 *QU\n",
        "100 !=200 \"b\"]\n",
        "200 \"a\"]\n",
    ));
    assert_eq!(run(&mut r), "abc\n");
}

#[test]
fn test_gosub_inside_counted_loop() {
    let mut r = runtime(concat!(
        "10 I=1,3 !=100 @=I+1\n",
        "20 #=-1\n",
        "100 ?=I*10 ]\n",
    ));
    assert_eq!(run(&mut r), "102030");
}

#[test]
fn test_frame_limit() {
    let mut r = runtime("10 @ #=10\n");
    assert_eq!(
        run_cycles(&mut r, 1_000_000),
        "?OUT OF MEMORY IN 10; TOO MANY NESTED FRAMES\n"
    );
}

#[test]
fn test_return_out_of_abandoned_loop() {
    let mut r = runtime(concat!(
        "10 !=100 \"back\"\n",
        "20 *QU\n",
        "100 I=1,9 ;=I=2 #=200\n",
        "110 @=I+1\n",
        "200 ]\n",
        "210 \"fell\"\n",
    ));
    assert_eq!(run(&mut r), "back");
    assert!(r.stack.is_empty());
}
