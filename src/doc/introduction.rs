/*!
# Introductory Tutorial for regscript

Begin by opening a terminal and running the executable. You will be
asked how many lines your script has. Any number from 1 to 256 works.
<pre><code>&nbsp;  regscript
&nbsp;  Enter number of lines: █
</code></pre>

After the count, type exactly that many lines. Each line is one
instruction: a mnemonic followed by its operands, separated by spaces
or tabs. Mnemonics may be typed in any case. There are no comments and
no blank lines; an empty line is a syntax error.

A script starts running at `label main`, so every script needs one.
Let's print a number. For this tutorial, I'll mark lines that you
type with a "`>`".

<pre><code>&nbsp;  Enter number of lines: 4
&nbsp;> label main
&nbsp;> def x 0x2a
&nbsp;> print x
&nbsp;> ret
&nbsp;
&nbsp;  Running script...
&nbsp;  variable: 'x', value: 0x2a
&nbsp;  Another script? (y/N)
</code></pre>

`def` creates a variable in the current frame. Integer literals are
hexadecimal and always begin with `0x`. String literals are wrapped
in double quotes and can't hold spaces.

<pre><code>&nbsp;> def s "hello"
&nbsp;> print s
&nbsp;  variable: 's', value: "hello"
</code></pre>

## Frames

Every `call` starts the callee with an empty frame of 32 variable slots.
The caller's variables are out of sight until `ret` brings them back,
and whatever the callee defined is thrown away. A `ret` from the frame
that `main` started in ends the script.

## Registers

Ten integer registers, `$0` through `$9`, are shared by every frame.
They are the only way to hand values into or out of a call. They start
at zero and keep their values from one script to the next.

<pre><code>&nbsp;  Enter number of lines: 10
&nbsp;> label main
&nbsp;> def r 0x0
&nbsp;> call answer
&nbsp;> load r $0
&nbsp;> print r
&nbsp;> ret
&nbsp;> label answer
&nbsp;> def v 0x2a
&nbsp;> store $0 v
&nbsp;> ret
&nbsp;
&nbsp;  Running script...
&nbsp;  variable: 'r', value: 0x2a
</code></pre>

## Errors

Any error ends the script. The error names the failing line, counting
from zero. When the failure happened inside a call, every `call` still
waiting on it is listed too.

<pre><code>&nbsp;  UNDEFINED VARIABLE IN 7; q
&nbsp;  CALL FAILED IN 4; b
&nbsp;  CALL FAILED IN 1; a
</code></pre>

Stop a running script with CTRL-C. It fails with `BREAK`.
A script that runs longer than the time limit (60 seconds unless
`--timeout` says otherwise) ends the whole session with
`EXECUTION TIMEOUT`.

## Script files

Put a script in a file and pass it on the command line to skip the
prompts. Every line of the file is one instruction.
```text
regscript answer.txt
regscript --entry start --max-depth 64 script.txt
```

Set `RUST_LOG=regscript=debug` to watch calls and returns on stderr.

*/
